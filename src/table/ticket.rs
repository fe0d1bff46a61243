//! Ticket lifecycle over a [`Table`]
//!
//! Columns 0-2 of a row are read as `{code, purchased, entered}` with `Y`/`N`
//! flags. A scan moves a ticket one step along
//! `N,N -> Y,N -> Y,Y` and every step that changes the grid is saved.

use std::fmt;

use serde::Serialize;

use super::error::Result;
use super::model::Table;

pub const CODE_COL: usize = 0;
pub const PURCHASED_COL: usize = 1;
pub const ENTERED_COL: usize = 2;

pub const FLAG_YES: &str = "Y";
pub const FLAG_NO: &str = "N";

/// Outcome of checking a ticket code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Purchased and now marked as entered
    Valid,
    /// Registered but not purchased; the check marks it purchased
    NotPurchased,
    /// Already entered
    Duplicate,
    /// No row has this code
    Invalid,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Valid => "VALID",
            TicketStatus::NotPurchased => "NOT_PURCHASED",
            TicketStatus::Duplicate => "DUPLICATE",
            TicketStatus::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory result of a scan, before anything is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketScan {
    pub status: TicketStatus,
    /// Row the code matched, if any
    pub row: Option<usize>,
    /// Whether the grid was changed and needs saving
    pub mutated: bool,
}

fn flag(row: &[String], col: usize) -> Option<&str> {
    row.get(col).map(String::as_str)
}

impl Table {
    /// Apply the ticket transition for `code` to the grid without saving
    pub fn scan_ticket(&mut self, code: &str) -> TicketScan {
        let Some(row_idx) = self.find_row(code) else {
            return TicketScan {
                status: TicketStatus::Invalid,
                row: None,
                mutated: false,
            };
        };

        let row = &mut self.rows_mut()[row_idx];

        // Rows narrower than the ticket schema are never matched
        if row.len() <= ENTERED_COL {
            return TicketScan {
                status: TicketStatus::Invalid,
                row: None,
                mutated: false,
            };
        }

        let (status, mutated) = if flag(row, PURCHASED_COL) == Some(FLAG_NO) {
            row[PURCHASED_COL] = FLAG_YES.to_string();
            (TicketStatus::NotPurchased, true)
        } else if flag(row, ENTERED_COL) == Some(FLAG_NO) {
            row[ENTERED_COL] = FLAG_YES.to_string();
            (TicketStatus::Valid, true)
        } else {
            (TicketStatus::Duplicate, false)
        };

        TicketScan {
            status,
            row: Some(row_idx),
            mutated,
        }
    }

    /// Check a ticket code, advance its state and save if anything changed
    ///
    /// A failed save is returned as an error; the in-memory transition is
    /// kept and the write is not retried.
    pub fn check_ticket_status(&mut self, code: &str) -> Result<TicketStatus> {
        let scan = self.scan_ticket(code);

        if scan.mutated {
            tracing::info!(code, row = ?scan.row, status = %scan.status, "Ticket advanced");
            self.save()?;
        } else {
            tracing::debug!(code, status = %scan.status, "Ticket unchanged");
        }

        Ok(scan.status)
    }

    /// Clear the purchase and entry flags of every purchased ticket, then save once
    ///
    /// Rows not marked purchased are left alone. Returns the number of rows reset.
    pub fn reset_statuses(&mut self) -> Result<usize> {
        let mut reset = 0;

        for row in self.rows_mut() {
            if flag(row, PURCHASED_COL) != Some(FLAG_YES) {
                continue;
            }
            row[PURCHASED_COL] = FLAG_NO.to_string();
            if flag(row, ENTERED_COL) == Some(FLAG_YES) {
                row[ENTERED_COL] = FLAG_NO.to_string();
            }
            reset += 1;
        }

        tracing::info!(reset, "Reset ticket statuses");
        self.save()?;
        Ok(reset)
    }
}
