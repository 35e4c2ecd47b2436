//! Handler for the `stats` command

use super::HandlerContext;
use crate::error::Result;
use std::collections::BTreeMap;

/// Print ticket counts by status and by priority
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn handle_stats_command(ctx: &HandlerContext) -> Result<()> {
    let stats = ctx.store.stats()?;

    if ctx.formatter.is_json() {
        return ctx.formatter.print_json(&stats);
    }

    ctx.formatter.info(&format!("Total tickets: {}", stats.total));
    print_counts(ctx, "Status Counts:", &stats.by_status);
    print_counts(ctx, "Priority Counts:", &stats.by_priority);
    Ok(())
}

fn print_counts(ctx: &HandlerContext, heading: &str, counts: &BTreeMap<String, usize>) {
    ctx.formatter.info(heading);
    for (label, count) in counts {
        ctx.formatter.info(&format!("- {label}: {count}"));
    }
}
