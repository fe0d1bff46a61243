//! Pre-read checks for table files
//!
//! Validates a path before the table loader reads it, checking for:
//! - File existence and permissions
//! - Binary content (tables are plain text)

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Reasons a path cannot be opened as a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileOpenError {
    /// File does not exist
    #[error("file not found")]
    NotFound,
    /// Permission denied to read file
    #[error("permission denied")]
    PermissionDenied,
    /// Path is a directory, not a file
    #[error("is a directory")]
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    #[error("binary file")]
    BinaryFile,
    /// Other I/O error
    #[error("{0}")]
    IoError(String),
}

/// Validate a path before reading it as a table
///
/// Checks existence, that it is not a directory, and that the first 8KB
/// contain no null bytes. There is no size limit.
pub fn validate_table_file(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileOpenError::NotFound,
        std::io::ErrorKind::PermissionDenied => FileOpenError::PermissionDenied,
        _ => FileOpenError::IoError(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }

    Ok(())
}

/// Check if a file is likely binary by scanning for null bytes
///
/// Returns `false` on any read error (let the actual read fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_nonexistent_file() {
        let result = validate_table_file(Path::new("/nonexistent/path/codes.txt"));
        assert_eq!(result, Err(FileOpenError::NotFound));
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_table_file(dir.path());
        assert_eq!(result, Err(FileOpenError::IsDirectory));
    }

    #[test]
    fn test_validate_text_table() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "T1\tN\tN").unwrap();
        temp.flush().unwrap();

        assert!(validate_table_file(temp.path()).is_ok());
    }

    #[test]
    fn test_validate_empty_file() {
        let temp = NamedTempFile::new().unwrap();
        assert!(validate_table_file(temp.path()).is_ok());
    }

    #[test]
    fn test_validate_large_file_has_no_size_cap() {
        let mut temp = NamedTempFile::new().unwrap();
        for i in 0..1_000 {
            writeln!(temp, "T{:05}\tN\tN", i).unwrap();
        }
        temp.flush().unwrap();
        // Sparse extension past 50 MB; the first 8KB stay text so it is not binary
        temp.as_file().set_len(60 * 1024 * 1024).unwrap();

        assert!(validate_table_file(temp.path()).is_ok());
    }

    #[test]
    fn test_validate_binary_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"T1\x00\tN").unwrap();
        temp.flush().unwrap();

        assert!(is_likely_binary(temp.path()));
        assert_eq!(
            validate_table_file(temp.path()),
            Err(FileOpenError::BinaryFile)
        );
    }
}
