//! Handler for the `new` command

use super::HandlerContext;
use crate::core::NewTicketBuilder;
use crate::error::Result;
use crate::storage::TicketRepository;

/// Parameters for creating a ticket
pub struct NewTicketArgs {
    pub title: String,
    pub category: String,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub notes: Option<String>,
}

/// Handle the `new` command
///
/// Missing priority and assignee fall back to the configured defaults.
///
/// # Errors
///
/// Returns a validation error if the title is empty, or a database error if
/// the row cannot be written.
pub fn handle_new_command(args: NewTicketArgs, ctx: &HandlerContext) -> Result<()> {
    let draft = NewTicketBuilder::new()
        .title(args.title)
        .category(args.category)
        .priority(
            args.priority
                .unwrap_or_else(|| ctx.config.default_priority.clone()),
        )
        .assignee(
            args.assignee
                .unwrap_or_else(|| ctx.config.default_assignee.clone()),
        )
        .notes(args.notes)
        .build();

    let ticket = ctx.store.insert(draft)?;
    ctx.report_ticket(
        &ticket,
        &format!("Ticket #{} created: {}", ticket.id, ticket.title),
    )
}
