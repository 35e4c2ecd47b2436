//! Command-line interface
//!
//! Argument definitions live here; each subcommand has a handler in
//! [`handlers`] and all user-facing output goes through [`OutputFormatter`].

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use crate::core::TicketId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IT helpdesk ticket tracker backed by a local SQLite file
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the ticket database
    #[arg(long, global = true, env = "HELPDESK_DB", value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new support ticket
    New {
        /// Short description of the issue
        #[arg(long)]
        title: String,

        /// Category such as Hardware, Software, Network, Account or Other
        #[arg(long)]
        category: String,

        /// Priority such as Low, Medium, High or Critical
        #[arg(long)]
        priority: Option<String>,

        /// Person responsible for the ticket
        #[arg(long)]
        assignee: Option<String>,

        /// Initial note
        #[arg(long)]
        notes: Option<String>,
    },

    /// List all tickets
    List {
        /// Only tickets with this status
        #[arg(long)]
        status: Option<String>,

        /// Only tickets with this priority
        #[arg(long)]
        priority: Option<String>,

        /// Only tickets in this category
        #[arg(long)]
        category: Option<String>,

        /// Only tickets assigned to this person
        #[arg(long)]
        assignee: Option<String>,

        /// Hide closed and resolved tickets
        #[arg(long)]
        open: bool,

        /// Newest tickets first
        #[arg(short, long)]
        reverse: bool,

        /// Show at most this many tickets
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show a single ticket with its notes
    Show {
        /// Ticket id
        #[arg(long)]
        id: TicketId,
    },

    /// Search tickets by keyword in title or notes
    Find {
        /// Keyword, or a pattern with --regex
        #[arg(long)]
        query: String,

        /// Treat the query as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Update ticket status
    Status {
        /// Ticket id
        #[arg(long)]
        id: TicketId,

        /// New status such as Open, In-Progress, Resolved or Closed
        #[arg(long)]
        status: String,
    },

    /// Add a note to a ticket
    Note {
        /// Ticket id
        #[arg(long)]
        id: TicketId,

        /// Note text
        #[arg(long)]
        note: String,
    },

    /// Assign a ticket to someone
    Assign {
        /// Ticket id
        #[arg(long)]
        id: TicketId,

        /// New assignee
        #[arg(long)]
        assignee: String,
    },

    /// Export all tickets to a file
    Export {
        /// Output file, overwritten if it exists
        #[arg(long)]
        path: PathBuf,

        /// csv, json or yaml; csv when omitted
        #[arg(long)]
        format: Option<String>,
    },

    /// Show ticket statistics
    Stats,
}
