//! Test utilities for helpdesk-ticket
//!
//! Shared fixtures so each test gets its own isolated store.

#![cfg(test)]

use crate::core::{NewTicket, NewTicketBuilder};
use crate::storage::SqliteStore;
use std::ops::Deref;
use tempfile::TempDir;

/// Test fixture owning an isolated ticket store
pub struct TestStore {
    store: SqliteStore,
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            store: SqliteStore::open_in_memory().expect("Failed to open in-memory store"),
            _temp_dir: None,
        }
    }

    /// Create an empty store backed by a file in a temporary directory
    pub fn on_disk() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = SqliteStore::open(temp_dir.path().join("data").join("tickets.db"))
            .expect("Failed to open file store");

        Self {
            store,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Create an in-memory store holding three sample tickets with ids 1..=3
    pub fn with_sample_tickets() -> Self {
        let fixture = Self::new();
        for draft in sample_tickets() {
            fixture
                .store
                .create_ticket(draft)
                .expect("Failed to create ticket");
        }
        fixture
    }
}

impl Deref for TestStore {
    type Target = SqliteStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// The ticket used throughout the examples
pub fn printer_ticket() -> NewTicket {
    NewTicket::new("Printer not connecting", "Hardware", "High", "Andrew")
}

/// Three tickets across categories and priorities
pub fn sample_tickets() -> Vec<NewTicket> {
    vec![
        printer_ticket(),
        NewTicketBuilder::new()
            .title("Outlook keeps crashing")
            .category("Software")
            .assignee("Kim")
            .build(),
        NewTicketBuilder::new()
            .title("VPN drops every hour")
            .category("Network")
            .priority("Low")
            .assignee("Lee")
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_with_sample_tickets() {
        let store = TestStore::with_sample_tickets();
        let tickets = store.list_all().unwrap();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[1].priority, "Medium");
    }

    #[test]
    fn test_on_disk_store_creates_parent_dirs() {
        let store = TestStore::on_disk();
        assert!(store.path().unwrap().exists());
    }
}
