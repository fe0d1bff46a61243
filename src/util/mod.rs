//! Utility modules

pub mod file_validation;

pub use file_validation::{is_likely_binary, validate_table_file, FileOpenError};
