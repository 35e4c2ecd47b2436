use crate::cli::{Cli, OutputFormatter};
use crate::config::Config;
use crate::core::Ticket;
use crate::error::Result;
use crate::storage::SqliteStore;

/// Common context for all handler operations
pub struct HandlerContext {
    pub config: Config,
    pub store: SqliteStore,
    pub formatter: OutputFormatter,
}

impl HandlerContext {
    /// Resolve configuration from the global flags and open the store
    pub fn from_cli(cli: &Cli, formatter: OutputFormatter) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?.with_database_path(cli.db.clone());
        let store = SqliteStore::open(&config.database_path)?;

        Ok(Self {
            config,
            store,
            formatter,
        })
    }

    /// Build a context around an already opened store
    pub const fn new(config: Config, store: SqliteStore, formatter: OutputFormatter) -> Self {
        Self {
            config,
            store,
            formatter,
        }
    }

    /// Print a single ticket as JSON or as a short confirmation line
    pub fn report_ticket(&self, ticket: &Ticket, message: &str) -> Result<()> {
        if self.formatter.is_json() {
            self.formatter.print_json(ticket)?;
        } else {
            self.formatter.success(message);
        }
        Ok(())
    }
}
