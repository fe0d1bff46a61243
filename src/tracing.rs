//! Logging setup and ticket-state diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=ticket_table::table=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/ticket-table/logs/ticket-table.log` with daily rotation.
//! File logging uses debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::table::{Table, ENTERED_COL, FLAG_YES, PURCHASED_COL};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so command output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Counts of tickets per lifecycle stage, for diffing before/after an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TicketTally {
    pub total: usize,
    pub purchased: usize,
    pub entered: usize,
}

impl TicketTally {
    pub fn from_table(table: &Table) -> Self {
        let mut tally = Self {
            total: table.row_count(),
            ..Self::default()
        };
        for row in table.rows() {
            let is_yes = |col: usize| row.get(col).is_some_and(|v| v == FLAG_YES);
            if is_yes(PURCHASED_COL) {
                tally.purchased += 1;
            }
            if is_yes(ENTERED_COL) {
                tally.entered += 1;
            }
        }
        tally
    }

    /// Generate a diff description between two tallies
    pub fn diff(&self, other: &TicketTally) -> Option<String> {
        let mut changes = Vec::new();
        if self.purchased != other.purchased {
            changes.push(format!("purchased: {} → {}", self.purchased, other.purchased));
        }
        if self.entered != other.entered {
            changes.push(format!("entered: {} → {}", self.entered, other.entered));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
