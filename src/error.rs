//! Error types for helpdesk-ticket
//!
//! All fallible operations return [`Result`], whose error side is
//! [`HelpdeskError`]. Each variant maps onto one coarse [`ErrorKind`] so the
//! CLI can report failures consistently.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// Coarse classification of failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was empty or missing
    Validation,
    /// A referenced ticket does not exist
    NotFound,
    /// The store file or an export path could not be read or written
    Io,
    /// Settings could not be loaded
    Config,
}

/// Main error type for helpdesk-ticket
#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ticket #{id} not found")]
    TicketNotFound { id: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl HelpdeskError {
    /// Classify the error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyField { .. } | Self::InvalidInput(_) => ErrorKind::Validation,
            Self::TicketNotFound { .. } => ErrorKind::NotFound,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_)
            | Self::Database(_)
            | Self::Csv(_)
            | Self::Json(_)
            | Self::Yaml(_) => ErrorKind::Io,
        }
    }

    /// Message shown to the user on stderr
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(rusqlite::Error::SqliteFailure(_, Some(msg))) => {
                format!("Database error: {msg}")
            },
            _ => self.to_string(),
        }
    }

    /// Hints on how to recover from the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => {
                vec![format!("Provide a non-empty value for {field}")]
            },
            Self::TicketNotFound { .. } => {
                vec!["Run 'helpdesk list' to see existing ticket ids".to_string()]
            },
            Self::Csv(_) | Self::Io(_) => vec![
                "Check that the target directory exists and is writable".to_string(),
            ],
            Self::Database(_) => vec![
                "Check the --db path or the HELPDESK_DB environment variable".to_string(),
            ],
            Self::Config(_) => vec![
                "Check the configuration file and HELPDESK_* environment variables".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Whether the user can fix the failure by changing their input
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            HelpdeskError::EmptyField { field: "title" }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            HelpdeskError::TicketNotFound { id: 7 }.kind(),
            ErrorKind::NotFound
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(HelpdeskError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_error_messages() {
        let err = HelpdeskError::TicketNotFound { id: 42 };
        assert_eq!(err.to_string(), "Ticket #42 not found");
        assert!(err.is_recoverable());
        assert!(!err.suggestions().is_empty());

        let err = HelpdeskError::EmptyField { field: "status" };
        assert_eq!(err.user_message(), "status cannot be empty");
    }
}
