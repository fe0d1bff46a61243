//! Tab-delimited ticket table
//!
//! Loads a tab-delimited file into a rectangular grid of text fields and
//! tracks ticket state in its first three columns.
//!
//! # Architecture
//!
//! ```text
//! file ──load──▶ Table ──save──▶ file
//!                 ├── rows (rectangular Vec<Vec<String>>)
//!                 ├── cell ops: get_cell / set_cell / change (no auto-save)
//!                 ├── lookups: lookup / search
//!                 └── tickets: scan_ticket ─▶ check_ticket_status (saves on change)
//!                              reset_statuses (saves once)
//! ```
//!
//! # File format
//!
//! One row per line, fields separated by a single tab, no quoting, no
//! header. Trailing empty fields are kept when reading; short rows are
//! padded to the widest row, so saving a ragged file writes the padding.

mod error;
mod model;
mod parser;
mod ticket;

pub use error::{Result, TableError};
pub use model::{CellPosition, Table};
pub use parser::{
    duplicate_keys, parse_rows, serialize_rows, split_fields, split_lines, FIELD_DELIMITER,
    LINE_TERMINATOR,
};
pub use ticket::{
    TicketScan, TicketStatus, CODE_COL, ENTERED_COL, FLAG_NO, FLAG_YES, PURCHASED_COL,
};
