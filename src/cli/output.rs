//! Output formatting for the CLI
//!
//! Text output is colored unless `--no-color` is given. In JSON mode only
//! structured values are written to stdout and status messages are
//! suppressed.

use crate::core::Ticket;
use crate::error::Result;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

/// Output formatter shared by all command handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter, disabling colors globally when requested
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    /// Whether output should be JSON
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {}", "[+]".green().bold(), message);
        }
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// Print a value as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print tickets as an aligned table
    pub fn print_tickets(&self, tickets: &[Ticket]) {
        for line in render_table(tickets) {
            println!("{line}");
        }
    }
}

const HEADERS: [&str; 7] = [
    "ID", "STATUS", "PRIORITY", "CATEGORY", "ASSIGNEE", "CREATED", "TITLE",
];

/// Render tickets as table lines, header first
fn render_table(tickets: &[Ticket]) -> Vec<String> {
    let rows: Vec<[String; 7]> = tickets
        .iter()
        .map(|t| {
            [
                format!("#{}", t.id),
                t.status.clone(),
                t.priority.clone(),
                t.category.clone(),
                t.assignee.clone(),
                t.created_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                t.title.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 7]| {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i + 1 == cells.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{cell:<width$}  "));
            }
        }
        line
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(HEADERS).bold().to_string());
    for row in &rows {
        lines.push(format_row(row.each_ref().map(String::as_str)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestStore;

    #[test]
    fn test_render_table_aligns_columns() {
        colored::control::set_override(false);
        let store = TestStore::with_sample_tickets();
        let lines = render_table(&store.list_all().unwrap());

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("#1"));
        assert!(lines[1].ends_with("Printer not connecting"));

        let title_column = lines[0].find("TITLE").unwrap();
        assert_eq!(lines[3].find("VPN drops every hour"), Some(title_column));
    }

    #[test]
    fn test_render_table_empty() {
        colored::control::set_override(false);
        assert_eq!(render_table(&[]).len(), 1);
    }
}
