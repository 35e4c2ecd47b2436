use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status assigned to every newly created ticket
pub const INITIAL_STATUS: &str = "Open";

/// Priority used when none is given on the command line
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Assignee used when none is given on the command line
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";

/// Integer identifier of a ticket, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// A stored helpdesk ticket
///
/// `id` and `created_at` are fixed once the store has persisted the row.
/// Status, assignee and notes change only through the dedicated store
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub assignee: String,
    pub status: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Whether the ticket status reads as finished
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "closed" | "resolved"
        )
    }

    /// Individual notes, oldest first
    pub fn note_lines(&self) -> impl Iterator<Item = &str> {
        self.notes.lines().filter(|line| !line.trim().is_empty())
    }
}

/// Ticket fields supplied by the caller before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub title: String,
    pub category: String,
    pub priority: String,
    pub assignee: String,
    pub notes: Option<String>,
}

impl NewTicket {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            priority: priority.into(),
            assignee: assignee.into(),
            notes: None,
        }
    }

    /// Check the draft before it is written
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::require("title", &self.title)
    }

    /// Turn the draft into a ticket with the id assigned by the store
    pub(crate) fn into_ticket(self, id: TicketId, created_at: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            title: self.title,
            category: self.category,
            priority: self.priority,
            assignee: self.assignee,
            status: INITIAL_STATUS.to_string(),
            notes: self.notes.unwrap_or_default(),
            created_at,
        }
    }
}

/// Creation timestamp, truncated to whole seconds
pub(crate) fn creation_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// RFC 3339 rendering used for the stored and exported `created_at`
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Field validation shared by the store operations
pub mod validation {
    use crate::error::{HelpdeskError, Result};

    /// Reject empty or whitespace-only values
    pub fn require(field: &'static str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(HelpdeskError::EmptyField { field });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_parsing() {
        assert_eq!("12".parse::<TicketId>().unwrap(), TicketId::new(12));
        assert_eq!("#3".parse::<TicketId>().unwrap(), TicketId::new(3));
        assert!("abc".parse::<TicketId>().is_err());
        assert_eq!(TicketId::new(5).to_string(), "5");
    }

    #[test]
    fn test_new_ticket_validation() {
        let draft = NewTicket::new("Printer not connecting", "Hardware", "High", "Andrew");
        assert!(draft.validate().is_ok());

        let draft = NewTicket::new("   ", "Hardware", "High", "Andrew");
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_into_ticket_sets_initial_status() {
        let created_at = creation_timestamp();
        let ticket = NewTicket::new("VPN drops", "Network", "Low", "Sam")
            .into_ticket(TicketId::new(1), created_at);

        assert_eq!(ticket.status, INITIAL_STATUS);
        assert_eq!(ticket.created_at, created_at);
        assert!(ticket.notes.is_empty());
        assert!(!ticket.is_closed());
    }

    #[test]
    fn test_note_lines_skip_blank_entries() {
        let mut ticket = NewTicket::new("Laptop", "Hardware", "Low", "Sam")
            .into_ticket(TicketId::new(1), creation_timestamp());
        ticket.notes = "\nfirst\n\nsecond".to_string();

        let notes: Vec<_> = ticket.note_lines().collect();
        assert_eq!(notes, vec!["first", "second"]);
    }
}
