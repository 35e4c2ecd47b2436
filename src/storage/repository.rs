use crate::core::{NewTicket, Ticket, TicketId};
use crate::error::Result;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface for storing and retrieving tickets,
/// allowing for different storage implementations.
pub trait TicketRepository {
    /// Persists a new ticket and returns it with its assigned id
    fn insert(&self, draft: NewTicket) -> Result<Ticket>;

    /// Loads a ticket by ID
    fn load(&self, id: TicketId) -> Result<Ticket>;

    /// Loads all tickets in ascending id order
    fn load_all(&self) -> Result<Vec<Ticket>>;

    /// Overwrites the status of a ticket
    fn set_status(&self, id: TicketId, status: &str) -> Result<Ticket>;

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool;
}

use super::sqlite::SqliteStore;

impl TicketRepository for SqliteStore {
    fn insert(&self, draft: NewTicket) -> Result<Ticket> {
        self.create_ticket(draft)
    }

    fn load(&self, id: TicketId) -> Result<Ticket> {
        self.get(id)
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.list_all()
    }

    fn set_status(&self, id: TicketId, status: &str) -> Result<Ticket> {
        self.update_status(id, status)
    }

    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool,
    {
        let tickets = self.list_all()?;
        Ok(tickets.into_iter().filter(|t| predicate(t)).collect())
    }
}
