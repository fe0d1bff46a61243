//! Command-line argument parsing
//!
//! Every subcommand maps onto one table operation. The table path comes
//! from `--file`, falling back to `default_table` in the config file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Manage a tab-delimited ticket table
#[derive(Parser, Debug)]
#[command(name = "ticket-table", version, about = "Manage a tab-delimited ticket table")]
pub struct CliArgs {
    /// Tab-delimited table file (defaults to `default_table` from the config)
    #[arg(short = 'f', long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every row
    Show,
    /// Print table dimensions and ticket counts
    Info,
    /// Print the first row whose code matches KEY
    Lookup { key: String },
    /// Print every position holding VALUE
    Search { value: String },
    /// Print a single cell
    Get { row: usize, col: usize },
    /// Change a single cell and save
    Set {
        row: usize,
        col: usize,
        value: String,
        /// Edit in memory only; the file is left untouched
        #[arg(long)]
        no_save: bool,
    },
    /// Check a ticket code and advance its status
    Check { code: String },
    /// Clear purchase and entry flags on all tickets
    Reset,
    /// Read ticket codes from stdin, one per line
    Scan,
}

impl CliArgs {
    /// Config file named by `--config`, or the default location
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(crate::config_paths::config_file)
    }

    /// Load the config named by `--config`, or the default one
    pub fn load_config(&self) -> AppConfig {
        match &self.config {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        }
    }

    /// Resolve which table file to operate on
    pub fn table_path(&self, config: &AppConfig) -> Result<PathBuf, String> {
        self.file
            .clone()
            .or_else(|| config.default_table.clone())
            .ok_or_else(|| {
                "No table file given; pass --file or set default_table in the config".to_string()
            })
    }
}
