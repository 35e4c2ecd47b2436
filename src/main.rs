//! helpdesk - IT helpdesk ticket tracker
//!
//! This is the main entry point for the helpdesk CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use clap::Parser;
use helpdesk_ticket::cli::handlers::{
    HandlerContext, NewTicketArgs, TicketFilter, handle_assign_command, handle_export_command,
    handle_find_command, handle_list_command, handle_new_command, handle_note_command,
    handle_show_command, handle_stats_command, handle_status_command,
};
use helpdesk_ticket::cli::{Cli, Commands, OutputFormatter};
use helpdesk_ticket::error::{HelpdeskError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the helpdesk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Any failure is reported on stderr and the process exits with status 1.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Set up logging on stderr
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the store and dispatch to the command handler
fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::from_cli(&cli, formatter)?;
    tracing::debug!(database = %ctx.config.database_path.display(), "using ticket store");

    dispatch_command(cli.command, &ctx)
}

fn dispatch_command(command: Commands, ctx: &HandlerContext) -> Result<()> {
    match command {
        Commands::New {
            title,
            category,
            priority,
            assignee,
            notes,
        } => handle_new_command(
            NewTicketArgs {
                title,
                category,
                priority,
                assignee,
                notes,
            },
            ctx,
        ),
        Commands::List {
            status,
            priority,
            category,
            assignee,
            open,
            reverse,
            limit,
        } => handle_list_command(
            &TicketFilter {
                status,
                priority,
                category,
                assignee,
                open_only: open,
                reverse,
                limit,
            },
            ctx,
        ),
        Commands::Show { id } => handle_show_command(id, ctx),
        Commands::Find { query, regex } => handle_find_command(&query, regex, ctx),
        Commands::Status { id, status } => handle_status_command(id, &status, ctx),
        Commands::Note { id, note } => handle_note_command(id, &note, ctx),
        Commands::Assign { id, assignee } => handle_assign_command(id, &assignee, ctx),
        Commands::Export { path, format } => {
            handle_export_command(&path, format.as_deref(), ctx)
        },
        Commands::Stats => handle_stats_command(ctx),
    }
}

/// Handle errors and display them to the user
///
/// Prints the error message and any suggestions. In JSON mode an error
/// object is also written to stdout.
fn handle_error(error: &HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !formatter.is_json() && !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_kind": format!("{:?}", error.kind()),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
