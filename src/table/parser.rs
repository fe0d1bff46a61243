//! Tab-delimited text parsing and serialization
//!
//! Fields are raw text: no quoting or escaping. Splitting keeps trailing
//! empty fields, so a line ending in a tab carries an empty last field.

use std::collections::HashMap;

/// Field separator within a line
pub const FIELD_DELIMITER: char = '\t';

/// Row terminator written by [`serialize_rows`]
pub const LINE_TERMINATOR: &str = "\n";

/// Split a single line into its fields without dropping trailing empties
///
/// `"x\ty\t"` yields `["x", "y", ""]`; an empty line yields `[""]`.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Split content into lines ending at `\r\n`, `\r` or `\n`
///
/// A terminator after the last line does not produce an extra line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Parse file content into ragged rows, one per line
///
/// An empty file yields no rows.
pub fn parse_rows(content: &str) -> Vec<Vec<String>> {
    split_lines(content).into_iter().map(split_fields).collect()
}

/// Serialize rows back to file content
///
/// Fields are joined by a single tab with no trailing tab, and every row,
/// including the last, is followed by a line terminator.
pub fn serialize_rows<R: AsRef<[String]>>(rows: &[R]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, field) in row.as_ref().iter().enumerate() {
            if i > 0 {
                out.push(FIELD_DELIMITER);
            }
            out.push_str(field);
        }
        out.push_str(LINE_TERMINATOR);
    }
    out
}

/// Codes that appear in column 0 of more than one row, with every row they occur on
///
/// Returned in order of first appearance. Only the first row of each group is
/// reachable through key lookups.
pub fn duplicate_keys<R: AsRef<[String]>>(rows: &[R]) -> Vec<(String, Vec<usize>)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let Some(key) = row.as_ref().first() else {
            continue;
        };
        match seen.get(key.as_str()) {
            Some(&group) => groups[group].1.push(row_idx),
            None => {
                seen.insert(key.as_str(), groups.len());
                groups.push((key.clone(), vec![row_idx]));
            }
        }
    }

    groups.retain(|(_, rows)| rows.len() > 1);
    groups
}
