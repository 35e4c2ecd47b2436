//! Handler for the `export` command

use super::HandlerContext;
use crate::error::Result;
use crate::storage::ExportFormat;
use std::path::Path;

/// Handle the `export` command
///
/// Writes CSV unless another format is named explicitly; the file
/// extension is not consulted.
///
/// # Errors
///
/// Returns an I/O error if `path` cannot be written, or a validation error
/// for an unknown format name.
pub fn handle_export_command(
    path: &Path,
    format: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    let format = match format {
        Some(name) => name.parse()?,
        None => ExportFormat::Csv,
    };

    let count = ctx.store.export(path, format)?;

    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&serde_json::json!({
            "path": path,
            "format": format.extension(),
            "count": count,
        }))?;
    } else {
        ctx.formatter.success(&format!(
            "Exported {count} ticket(s) to {}",
            path.display()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::common::test_support::memory_context;
    use crate::error::ErrorKind;
    use crate::test_utils::sample_tickets;
    use tempfile::TempDir;

    #[test]
    fn test_export_defaults_to_csv_regardless_of_extension() {
        let ctx = memory_context();
        for draft in sample_tickets() {
            ctx.store.create_ticket(draft).unwrap();
        }
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        handle_export_command(&path, None, &ctx).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,title,category,priority,assignee,status,created_at\n"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_export_json_only_when_requested() {
        let ctx = memory_context();
        for draft in sample_tickets() {
            ctx.store.create_ticket(draft).unwrap();
        }
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");

        handle_export_command(&path, Some("json"), &ctx).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_export_explicit_format_names() {
        let ctx = memory_context();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        handle_export_command(&path, Some("csv"), &ctx).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,title,category"));

        let err = handle_export_command(&path, Some("xml"), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
