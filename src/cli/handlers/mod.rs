//! Command handlers
//!
//! One handler per subcommand. Each takes a [`HandlerContext`] holding the
//! open store, the resolved configuration and the output formatter.

mod common;
mod create;
mod export;
mod find;
mod list;
mod show;
mod stats;
mod update;

pub use common::HandlerContext;
pub use create::{NewTicketArgs, handle_new_command};
pub use export::handle_export_command;
pub use find::handle_find_command;
pub use list::{TicketFilter, handle_list_command};
pub use show::handle_show_command;
pub use stats::handle_stats_command;
pub use update::{handle_assign_command, handle_note_command, handle_status_command};
