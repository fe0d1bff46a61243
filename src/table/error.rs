//! Error types for table loading, persistence and cell access

use std::path::PathBuf;

use thiserror::Error;

use crate::util::FileOpenError;

pub type Result<T> = std::result::Result<T, TableError>;

/// Errors reported by [`Table`](super::Table) operations
///
/// Key misses from `lookup`/`search` are not errors; they come back as
/// `None` or an empty result.
#[derive(Debug, Error)]
pub enum TableError {
    /// Backing file does not exist
    #[error("table file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Backing file exists but could not be read as a table
    #[error("failed to read table {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    /// Writing the grid back to disk failed
    #[error("failed to write table {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row or column outside the table's dimensions
    #[error("invalid row or column: ({row}, {col}) outside {rows}x{cols}")]
    InvalidIndex {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl TableError {
    pub(crate) fn from_open_error(path: PathBuf, err: FileOpenError) -> Self {
        match err {
            FileOpenError::NotFound => Self::NotFound { path },
            other => Self::Read {
                path,
                reason: other.to_string(),
            },
        }
    }

    pub(crate) fn from_read_error(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::InvalidData => Self::Read {
                path,
                reason: "file is not valid UTF-8 text".to_string(),
            },
            _ => Self::Read {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Whether this error came from loading the file (as opposed to writing or indexing)
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Read { .. })
    }
}
