//! Interactive ticket scanning
//!
//! A [`ScanSession`] turns raw scanner input into table operations and
//! user-facing feedback. The reset keyword is handled here, never by the
//! table itself.

use serde::Serialize;

use crate::config::AppConfig;
use crate::table::{self, Table, TicketStatus};
use crate::tracing::TicketTally;

/// How feedback should be presented (colour/sound in a graphical front-end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Admit the holder
    Accept,
    /// Turn the holder away
    Reject,
    /// Administrative message
    Info,
}

impl Tone {
    /// Short marker for terminal output
    pub fn marker(self) -> &'static str {
        match self {
            Tone::Accept => "[ OK ]",
            Tone::Reject => "[FAIL]",
            Tone::Info => "[INFO]",
        }
    }
}

/// Result of handling one scanner input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFeedback {
    /// Ticket status, or `None` for a reset
    pub status: Option<TicketStatus>,
    pub tone: Tone,
    pub message: String,
}

impl ScanFeedback {
    pub fn for_status(code: &str, status: TicketStatus) -> Self {
        let (tone, message) = match status {
            TicketStatus::Valid => (Tone::Accept, format!("{} is valid", code)),
            TicketStatus::NotPurchased => (
                Tone::Reject,
                format!("{} has not been purchased yet.", code),
            ),
            TicketStatus::Duplicate => {
                (Tone::Reject, format!("{} has already been used.", code))
            }
            TicketStatus::Invalid => (Tone::Reject, format!("{} is invalid.", code)),
        };
        Self {
            status: Some(status),
            tone,
            message,
        }
    }

    fn reset(count: usize) -> Self {
        Self {
            status: None,
            tone: Tone::Info,
            message: format!(
                "All purchase and entry statuses have been reset ({} tickets).",
                count
            ),
        }
    }
}

/// A scanning station bound to one table
#[derive(Debug)]
pub struct ScanSession {
    table: Table,
    config: AppConfig,
}

impl ScanSession {
    pub fn new(table: Table, config: AppConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    /// Handle one line of scanner input
    ///
    /// Surrounding whitespace is trimmed before the lookup, so a code stored
    /// with leading or trailing whitespace never matches a scan; use
    /// [`Table::check_ticket_status`] directly for raw codes. Blank input
    /// yields `None`.
    /// Save failures are returned as errors; the session stays usable.
    pub fn handle(&mut self, input: &str) -> table::Result<Option<ScanFeedback>> {
        let code = input.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let before = TicketTally::from_table(&self.table);

        let feedback = if self.config.is_reset_keyword(code) {
            let count = self.table.reset_statuses()?;
            ScanFeedback::reset(count)
        } else {
            let status = self.table.check_ticket_status(code)?;
            ScanFeedback::for_status(code, status)
        };

        if let Some(diff) = before.diff(&TicketTally::from_table(&self.table)) {
            tracing::debug!(input = code, "Scan changed tally: {}", diff);
        }

        Ok(Some(feedback))
    }
}
