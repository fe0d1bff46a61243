//! Ticket table
//!
//! Tracks ticket codes in a tab-delimited file: whether each code exists,
//! has been purchased, and has been used to enter. The [`table`] module is
//! the core; the rest is configuration, logging and the command-line
//! front-end built on it.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod scan;
pub mod table;
pub mod tracing;
pub mod util;

pub use config::AppConfig;
pub use table::{CellPosition, Table, TableError, TicketStatus};
