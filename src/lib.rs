//! helpdesk-ticket - A command-line helpdesk ticket tracker
//!
//! Tickets (title, category, priority, assignee, status) are kept in a
//! single SQLite table in a local file. The crate provides:
//! - Ticket creation with monotonically increasing integer ids
//! - Listing, keyword search, status updates, reassignment and notes
//! - Export to CSV, JSON or YAML
//! - Status and priority statistics

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]

//! # Example
//!
//! ```rust,no_run
//! use helpdesk_ticket::storage::SqliteStore;
//!
//! # fn main() -> helpdesk_ticket::Result<()> {
//! let store = SqliteStore::open("tickets.db")?;
//!
//! let ticket = store.create("Printer not connecting", "Hardware", "High", "Andrew")?;
//! store.update_status(ticket.id, "In-Progress")?;
//!
//! let written = store.export_csv("tickets.csv")?;
//! assert_eq!(written, store.list_all()?.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ErrorKind, HelpdeskError, Result};
