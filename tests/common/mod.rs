//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use ticket_table::table::Table;

/// A table file inside its own temporary directory
pub struct TableFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TableFixture {
    /// Write `content` to a fresh `codes.txt`
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("codes.txt");
        std::fs::write(&path, content).expect("write table fixture");
        Self { _dir: dir, path }
    }

    /// A path in the fixture directory that does not exist
    pub fn missing(&self) -> PathBuf {
        self.path.with_file_name("missing.txt")
    }

    pub fn load(&self) -> Table {
        Table::load(&self.path).expect("load table fixture")
    }

    pub fn content(&self) -> String {
        read(&self.path)
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read table file")
}

/// Row of a table as string slices, for terse assertions
pub fn row_of<'a>(table: &'a Table, row: usize) -> Vec<&'a str> {
    table
        .row(row)
        .expect("row in range")
        .iter()
        .map(String::as_str)
        .collect()
}
