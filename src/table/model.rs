//! Table data model
//!
//! A [`Table`] owns a rectangular grid of text fields and the path of the
//! file it was loaded from. Cell edits stay in memory until [`Table::save`];
//! ticket transitions in [`super::ticket`] save on their own.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::{Result, TableError};
use super::parser::{duplicate_keys, parse_rows, serialize_rows, FIELD_DELIMITER};
use crate::util::validate_table_file;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column {}", self.row, self.col)
    }
}

/// In-memory rectangular grid backed by a tab-delimited file
#[derive(Debug, Clone)]
pub struct Table {
    /// File the grid was loaded from and is saved to
    source_path: PathBuf,
    /// Rows in file order, each exactly `column_count` fields wide
    rows: Vec<Vec<String>>,
    /// Number of columns (max across all source lines)
    column_count: usize,
}

impl Table {
    /// Create an empty table bound to `path` without touching the file
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            rows: Vec::new(),
            column_count: 0,
        }
    }

    /// Build a table from ragged rows, padding short rows with empty fields
    pub fn from_rows(path: impl Into<PathBuf>, parsed_rows: Vec<Vec<String>>) -> Self {
        let column_count = parsed_rows.iter().map(|r| r.len()).max().unwrap_or(0);

        let rows = parsed_rows
            .into_iter()
            .map(|mut row| {
                row.resize(column_count, String::new());
                row
            })
            .collect();

        Self {
            source_path: path.into(),
            rows,
            column_count,
        }
    }

    /// Load a table from a tab-delimited file
    ///
    /// Fails with [`TableError::NotFound`] when the file is missing and
    /// [`TableError::Read`] for any other read problem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        validate_table_file(path)
            .map_err(|e| TableError::from_open_error(path.to_path_buf(), e))?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::from_read_error(path.to_path_buf(), e))?;

        let table = Self::from_rows(path, parse_rows(&content));

        for (code, rows) in table.duplicate_codes() {
            tracing::warn!(
                "Duplicate ticket code {:?} in {} at rows {:?}; only row {} is reachable",
                code,
                path.display(),
                rows,
                rows[0]
            );
        }

        tracing::debug!("Loaded {}", table);
        Ok(table)
    }

    /// Load a table, degrading to an empty table bound to `path` on failure
    ///
    /// The failure is logged; callers detect it with [`Table::is_empty`].
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!("{}; continuing with an empty table", e);
                Self::empty(path)
            }
        }
    }

    /// Write the grid back to the source file, replacing its contents
    pub fn save(&self) -> Result<()> {
        let content = serialize_rows(&self.rows);

        std::fs::write(&self.source_path, content).map_err(|source| TableError::Write {
            path: self.source_path.clone(),
            source,
        })?;

        tracing::debug!(
            "Saved {} rows to {}",
            self.rows.len(),
            self.source_path.display()
        );
        Ok(())
    }

    /// Path of the backing file
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row, if in range
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    /// First row whose column 0 equals `key`
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.find_row(key).map(|row| self.rows[row].as_slice())
    }

    /// Index of the first row whose column 0 equals `key`
    pub fn find_row(&self, key: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.first().is_some_and(|code| code == key))
    }

    /// Every cell equal to `value`, in row-major order
    ///
    /// An empty result means the value does not occur anywhere.
    pub fn search(&self, value: &str) -> Vec<CellPosition> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, cell)| cell.as_str() == value)
                    .map(move |(c, _)| CellPosition::new(r, c))
            })
            .collect()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < self.row_count() && col < self.column_count {
            Ok(())
        } else {
            Err(TableError::InvalidIndex {
                row,
                col,
                rows: self.row_count(),
                cols: self.column_count,
            })
        }
    }

    /// Get cell value at position
    pub fn get_cell(&self, row: usize, col: usize) -> Result<&str> {
        self.check_bounds(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Set cell value at position
    ///
    /// Out-of-range positions leave the grid untouched. Does not save.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) -> Result<()> {
        self.check_bounds(row, col)?;
        self.rows[row][col] = value.to_string();
        Ok(())
    }

    /// Same as [`Table::set_cell`]
    pub fn change(&mut self, row: usize, col: usize, value: &str) -> Result<()> {
        self.set_cell(row, col, value)
    }

    /// Codes that occur in column 0 of more than one row, with their row indices
    pub fn duplicate_codes(&self) -> Vec<(String, Vec<usize>)> {
        duplicate_keys(&self.rows)
    }

    /// Render every row for display: each cell followed by a tab, one row per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for cell in row {
                out.push_str(cell);
                out.push(FIELD_DELIMITER);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table: {}  rows = {}  cols = {}",
            self.source_path.display(),
            self.row_count(),
            self.column_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn grid(rows: &[&[&str]]) -> Table {
        Table::from_rows("test.txt", rows.iter().map(|r| row(r)).collect())
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let table = grid(&[&["a", "b", "c"], &["1", "2"], &[""]]);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert!(table.rows().iter().all(|r| r.len() == 3));
        assert_eq!(table.row(1), Some(row(&["1", "2", ""]).as_slice()));
        assert_eq!(table.row(2), Some(row(&["", "", ""]).as_slice()));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty("missing.txt");
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.source_path(), Path::new("missing.txt"));
    }

    #[test]
    fn test_lookup_first_match() {
        let table = grid(&[&["T1", "N", "N"], &["T2", "Y", "N"], &["T2", "Y", "Y"]]);

        assert_eq!(table.lookup("T2"), Some(row(&["T2", "Y", "N"]).as_slice()));
        assert_eq!(table.find_row("T2"), Some(1));
        assert_eq!(table.lookup("T9"), None);
    }

    #[test]
    fn test_lookup_only_matches_first_column() {
        let table = grid(&[&["T1", "T2", "N"]]);
        assert_eq!(table.lookup("T2"), None);
    }

    #[test]
    fn test_search_row_major_order() {
        let table = grid(&[&["a", "b"], &["b", "a"]]);

        assert_eq!(
            table.search("a"),
            vec![CellPosition::new(0, 0), CellPosition::new(1, 1)]
        );
        assert!(table.search("z").is_empty());
    }

    #[test]
    fn test_search_matches_padding() {
        let table = grid(&[&["a", "b"], &["c"]]);
        assert_eq!(table.search(""), vec![CellPosition::new(1, 1)]);
    }

    #[test]
    fn test_get_cell() {
        let table = grid(&[&["name", "age"], &["Alice", "30"]]);

        assert_eq!(table.get_cell(1, 0).unwrap(), "Alice");
        assert!(matches!(
            table.get_cell(2, 0),
            Err(TableError::InvalidIndex { row: 2, col: 0, rows: 2, cols: 2 })
        ));
        assert!(matches!(
            table.get_cell(0, 2),
            Err(TableError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_set_cell_and_change() {
        let mut table = grid(&[&["a", "b"]]);

        table.set_cell(0, 0, "updated").unwrap();
        assert_eq!(table.get_cell(0, 0).unwrap(), "updated");

        table.change(0, 1, "also updated").unwrap();
        assert_eq!(table.get_cell(0, 1).unwrap(), "also updated");
    }

    #[test]
    fn test_set_cell_out_of_range_leaves_grid_unchanged() {
        let mut table = grid(&[&["a", "b"], &["c", "d"]]);
        let before = table.rows().to_vec();

        assert!(table.set_cell(2, 0, "x").is_err());
        assert!(table.set_cell(0, 2, "x").is_err());
        assert!(table.change(5, 5, "x").is_err());

        assert_eq!(table.rows(), before.as_slice());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_table_rejects_all_indices() {
        let mut table = Table::empty("empty.txt");
        assert!(table.get_cell(0, 0).is_err());
        assert!(table.set_cell(0, 0, "x").is_err());
    }

    #[test]
    fn test_render() {
        let table = grid(&[&["T1", "N", "N"], &["T2", "Y"]]);
        assert_eq!(table.render(), "T1\tN\tN\t\nT2\tY\t\t\n");
    }

    #[test]
    fn test_display() {
        let table = grid(&[&["T1", "N", "N"], &["T2", "Y", "Y"]]);
        assert_eq!(table.to_string(), "Table: test.txt  rows = 2  cols = 3");
    }

    #[test]
    fn test_cell_position_display() {
        assert_eq!(CellPosition::new(3, 1).to_string(), "row 3 column 1");
    }
}
