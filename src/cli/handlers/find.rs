//! Handler for the `find` command

use super::HandlerContext;
use crate::core::{Ticket, validation};
use crate::error::{HelpdeskError, Result};
use crate::storage::{SqliteStore, TicketRepository};
use regex::RegexBuilder;

/// Tickets matching a keyword, or a case-insensitive regex when `regex` is set
pub fn find_tickets(store: &SqliteStore, query: &str, regex: bool) -> Result<Vec<Ticket>> {
    if !regex {
        return store.search(query);
    }

    validation::require("query", query)?;
    let pattern = RegexBuilder::new(query)
        .case_insensitive(true)
        .build()
        .map_err(|e| HelpdeskError::InvalidInput(format!("Invalid regex: {e}")))?;
    store.find(|t| pattern.is_match(&t.title) || pattern.is_match(&t.notes))
}

/// Handle the `find` command
///
/// # Errors
///
/// Returns a validation error for an empty query or an invalid regex.
pub fn handle_find_command(query: &str, regex: bool, ctx: &HandlerContext) -> Result<()> {
    let tickets = find_tickets(&ctx.store, query, regex)?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&tickets)?;
    } else if tickets.is_empty() {
        ctx.formatter.info(&format!("No tickets matching '{query}'"));
    } else {
        ctx.formatter.print_tickets(&tickets);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketId;
    use crate::error::ErrorKind;
    use crate::test_utils::TestStore;

    #[test]
    fn test_find_keyword() {
        let store = TestStore::with_sample_tickets();
        let found = find_tickets(&store, "outlook", false).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, TicketId::new(2));
    }

    #[test]
    fn test_find_regex_matches_notes() {
        let store = TestStore::with_sample_tickets();
        store.add_note(TicketId::new(3), "Ticket ref INC-4412").unwrap();

        let found = find_tickets(&store, r"inc-\d+", true).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, TicketId::new(3));
    }

    #[test]
    fn test_find_rejects_bad_input() {
        let store = TestStore::with_sample_tickets();
        let err = find_tickets(&store, "(unclosed", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        let err = find_tickets(&store, "", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
