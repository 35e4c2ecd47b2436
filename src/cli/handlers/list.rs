//! Handler for the `list` command

use super::HandlerContext;
use crate::core::Ticket;
use crate::error::Result;
use crate::storage::TicketRepository;

/// Ticket filtering for the `list` command
///
/// Text filters compare case-insensitively. Tickets keep ascending id order
/// unless `reverse` is set; `limit` applies after ordering.
#[derive(Debug, Default, Clone)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub assignee: Option<String>,
    pub open_only: bool,
    pub reverse: bool,
    pub limit: Option<usize>,
}

impl TicketFilter {
    /// Apply all filters to a list of tickets
    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        let mut filtered: Vec<Ticket> = tickets
            .into_iter()
            .filter(|ticket| self.matches(ticket))
            .collect();

        if self.reverse {
            filtered.reverse();
        }
        if let Some(limit) = self.limit {
            filtered.truncate(limit);
        }
        filtered
    }

    /// Check if a ticket matches all filter criteria
    fn matches(&self, ticket: &Ticket) -> bool {
        field_matches(self.status.as_deref(), &ticket.status)
            && field_matches(self.priority.as_deref(), &ticket.priority)
            && field_matches(self.category.as_deref(), &ticket.category)
            && field_matches(self.assignee.as_deref(), &ticket.assignee)
            && !(self.open_only && ticket.is_closed())
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|wanted| wanted.trim().eq_ignore_ascii_case(actual.trim()))
}

/// Handle the `list` command
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn handle_list_command(filter: &TicketFilter, ctx: &HandlerContext) -> Result<()> {
    let tickets = filter.apply(ctx.store.load_all()?);

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&tickets)?;
    } else if tickets.is_empty() {
        ctx.formatter.info("No tickets found");
    } else {
        ctx.formatter.print_tickets(&tickets);
    }
    Ok(())
}
