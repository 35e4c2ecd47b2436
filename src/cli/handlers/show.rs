//! Handler for the `show` command

use super::HandlerContext;
use crate::core::TicketId;
use crate::error::Result;
use crate::storage::TicketRepository;
use chrono::Local;

/// Print one ticket with all of its notes
///
/// # Errors
///
/// Returns a not-found error if no ticket has the given id.
pub fn handle_show_command(id: TicketId, ctx: &HandlerContext) -> Result<()> {
    let ticket = ctx.store.load(id)?;

    if ctx.formatter.is_json() {
        return ctx.formatter.print_json(&ticket);
    }

    let out = &ctx.formatter;
    out.info(&format!("#{} [{}] {}", ticket.id, ticket.status, ticket.title));
    out.info(&format!("Category: {}", ticket.category));
    out.info(&format!("Priority: {}", ticket.priority));
    out.info(&format!("Assignee: {}", ticket.assignee));
    out.info(&format!(
        "Created:  {}",
        ticket
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    ));

    let notes: Vec<&str> = ticket.note_lines().collect();
    if !notes.is_empty() {
        out.info("\nNotes:");
        for note in notes {
            out.info(&format!("  - {note}"));
        }
    }
    Ok(())
}
