//! Handlers for commands that modify an existing ticket

use super::HandlerContext;
use crate::core::TicketId;
use crate::error::Result;
use crate::storage::TicketRepository;

/// Handle the `status` command
///
/// # Errors
///
/// Returns a not-found error for an unknown id, or a validation error for an
/// empty status. The store is left unchanged in both cases.
pub fn handle_status_command(id: TicketId, status: &str, ctx: &HandlerContext) -> Result<()> {
    let ticket = ctx.store.set_status(id, status)?;
    ctx.report_ticket(
        &ticket,
        &format!("Ticket #{} status updated to: {}", ticket.id, ticket.status),
    )
}

/// Handle the `assign` command
pub fn handle_assign_command(id: TicketId, assignee: &str, ctx: &HandlerContext) -> Result<()> {
    let ticket = ctx.store.assign(id, assignee)?;
    ctx.report_ticket(
        &ticket,
        &format!("Ticket #{} assigned to {}", ticket.id, ticket.assignee),
    )
}

/// Handle the `note` command
pub fn handle_note_command(id: TicketId, note: &str, ctx: &HandlerContext) -> Result<()> {
    let ticket = ctx.store.add_note(id, note)?;
    ctx.report_ticket(&ticket, &format!("Note added to Ticket #{}", ticket.id))
}
