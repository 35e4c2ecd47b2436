use crate::core::{Ticket, format_timestamp};
use crate::error::{HelpdeskError, Result};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Fixed header row of the CSV export
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "title",
    "category",
    "priority",
    "assignee",
    "status",
    "created_at",
];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Get file extension for the format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Write the tickets to `path`, replacing any existing file
    ///
    /// Output is staged in a temporary file next to `path` and renamed over
    /// it once complete.
    pub fn write_to_path(self, path: &Path, tickets: &[Ticket]) -> Result<usize> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;

        let count = self.write_to(BufWriter::new(staged.as_file_mut()), tickets)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| e.error)?;
        Ok(count)
    }

    fn write_to<W: Write>(self, mut writer: W, tickets: &[Ticket]) -> Result<usize> {
        match self {
            Self::Csv => write_records(csv::Writer::from_writer(writer), tickets),
            Self::Json => {
                serde_json::to_writer_pretty(&mut writer, tickets)?;
                writer.write_all(b"\n")?;
                writer.flush()?;
                Ok(tickets.len())
            },
            Self::Yaml => {
                serde_yaml::to_writer(&mut writer, tickets)?;
                writer.flush()?;
                Ok(tickets.len())
            },
        }
    }
}

impl FromStr for ExportFormat {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(HelpdeskError::InvalidInput(format!(
                "Unsupported export format '{other}'. Use csv, json or yaml"
            ))),
        }
    }
}

/// Write the header and one row per ticket, returning the data row count
fn write_records<W: Write>(mut writer: csv::Writer<W>, tickets: &[Ticket]) -> Result<usize> {
    writer.write_record(CSV_HEADER)?;
    for ticket in tickets {
        let id = ticket.id.to_string();
        let created_at = format_timestamp(&ticket.created_at);
        writer.write_record([
            id.as_str(),
            ticket.title.as_str(),
            ticket.category.as_str(),
            ticket.priority.as_str(),
            ticket.assignee.as_str(),
            ticket.status.as_str(),
            created_at.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(tickets.len())
}
