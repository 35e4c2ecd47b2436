//! Layered configuration
//!
//! Settings are resolved in this order, later sources winning:
//! built-in defaults, the config file, `HELPDESK_*` environment variables,
//! and finally command-line flags applied by the caller.

use crate::core::{DEFAULT_ASSIGNEE, DEFAULT_PRIORITY};
use crate::error::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the store inside the data directory
pub const DATABASE_FILE: &str = "tickets.db";

/// File name of the optional configuration file
pub const CONFIG_FILE: &str = "helpdesk.toml";

const ENV_PREFIX: &str = "HELPDESK";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Location of the SQLite store
    pub database_path: PathBuf,
    /// Priority for new tickets created without `--priority`
    pub default_priority: String,
    /// Assignee for new tickets created without `--assignee`
    pub default_assignee: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            default_priority: DEFAULT_PRIORITY.to_string(),
            default_assignee: DEFAULT_ASSIGNEE.to_string(),
        }
    }
}

impl Config {
    /// Load settings from the given file, or the platform config file if none
    ///
    /// An explicitly named file must exist; the platform file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default(
                "database_path",
                defaults.database_path.to_string_lossy().into_owned(),
            )?
            .set_default("default_priority", defaults.default_priority)?
            .set_default("default_assignee", defaults.default_assignee)?;

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => match default_config_path() {
                Some(path) => builder.add_source(config::File::from(path).required(false)),
                None => builder,
            },
        };

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let config: Self = settings.try_deserialize()?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Replace the store location, e.g. from `--db`
    #[must_use]
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "helpdesk")
}

/// Platform data directory store, falling back to the working directory
fn default_database_path() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(DATABASE_FILE),
        |dirs| dirs.data_dir().join(DATABASE_FILE),
    )
}

fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe {
            std::env::remove_var("HELPDESK_DATABASE_PATH");
            std::env::remove_var("HELPDESK_DEFAULT_PRIORITY");
            std::env::remove_var("HELPDESK_DEFAULT_ASSIGNEE");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "database_path = \"/srv/helpdesk/tickets.db\"\ndefault_assignee = \"Service Desk\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/helpdesk/tickets.db"));
        assert_eq!(config.default_assignee, "Service Desk");
        assert_eq!(config.default_priority, DEFAULT_PRIORITY);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "default_priority = \"Low\"\n").unwrap();

        // SAFETY: serialised with the other environment tests
        unsafe { std::env::set_var("HELPDESK_DEFAULT_PRIORITY", "Critical") };
        let config = Config::load(Some(path.as_path()));
        clear_env();

        assert_eq!(config.unwrap().default_priority, "Critical");
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_error() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_with_database_path_override() {
        let config = Config::default().with_database_path(Some(PathBuf::from("local.db")));
        assert_eq!(config.database_path, PathBuf::from("local.db"));

        let config = config.with_database_path(None);
        assert_eq!(config.database_path, PathBuf::from("local.db"));
    }
}
