//! Ticket persistence
//!
//! Tickets live in a single SQLite table. [`SqliteStore`] owns the
//! connection and is passed explicitly to every caller; tests use
//! [`SqliteStore::open_in_memory`] or a file under a temporary directory.

mod export;
mod repository;
mod schema;
mod sqlite;

pub use export::{CSV_HEADER, ExportFormat};
pub use repository::TicketRepository;
pub use sqlite::{SqliteStore, TicketStats};
