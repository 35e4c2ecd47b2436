//! Core domain types for helpdesk tickets

mod builders;
mod ticket;

pub use builders::NewTicketBuilder;
pub use ticket::{
    DEFAULT_ASSIGNEE, DEFAULT_PRIORITY, INITIAL_STATUS, NewTicket, Ticket, TicketId, validation,
};
pub(crate) use ticket::{creation_timestamp, format_timestamp};
