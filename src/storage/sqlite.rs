use super::export::ExportFormat;
use super::schema::apply_schema;
use crate::core::{
    INITIAL_STATUS, NewTicket, Ticket, TicketId, creation_timestamp, format_timestamp, validation,
};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, Type, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const TICKET_COLUMNS: &str = "id, title, category, priority, assignee, status, notes, created_at";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Aggregate counts over all tickets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_priority: BTreeMap<String, usize>,
}

/// SQLite-backed ticket store
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open or create the store file at `path`
    ///
    /// Missing parent directories are created and the schema is applied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let journal_mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        apply_schema(&conn)?;

        debug!(path = %path.display(), %journal_mode, "opened ticket store");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create a ticket from its four descriptive fields
    pub fn create(
        &self,
        title: &str,
        category: &str,
        priority: &str,
        assignee: &str,
    ) -> Result<Ticket> {
        self.create_ticket(NewTicket::new(title, category, priority, assignee))
    }

    /// Validate and persist a draft, returning the stored ticket
    pub fn create_ticket(&self, draft: NewTicket) -> Result<Ticket> {
        draft.validate()?;
        let created_at = creation_timestamp();

        self.conn.execute(
            "INSERT INTO tickets (title, category, priority, assignee, status, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.title,
                draft.category,
                draft.priority,
                draft.assignee,
                INITIAL_STATUS,
                draft.notes.as_deref().unwrap_or_default(),
                format_timestamp(&created_at),
            ],
        )?;
        let id = TicketId::new(self.conn.last_insert_rowid());

        info!(%id, title = %draft.title, "created ticket");
        Ok(draft.into_ticket(id, created_at))
    }

    /// All tickets, ordered by ascending id
    pub fn list_all(&self) -> Result<Vec<Ticket>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TICKET_COLUMNS} FROM tickets ORDER BY id ASC"))?;
        let tickets = stmt
            .query_map([], ticket_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tickets)
    }

    /// Load a single ticket
    pub fn get(&self, id: TicketId) -> Result<Ticket> {
        self.conn
            .query_row(
                &format!("SELECT {TICKET_COLUMNS} FROM tickets WHERE id = ?1"),
                [id],
                ticket_from_row,
            )
            .optional()?
            .ok_or(HelpdeskError::TicketNotFound { id: id.get() })
    }

    /// Overwrite the status of a ticket
    pub fn update_status(&self, id: TicketId, status: &str) -> Result<Ticket> {
        self.ensure_exists(id)?;
        validation::require("status", status)?;
        self.update_column(id, "UPDATE tickets SET status = ?1 WHERE id = ?2", status)?;
        info!(%id, status, "updated ticket status");
        self.get(id)
    }

    /// Hand a ticket over to another person
    pub fn assign(&self, id: TicketId, assignee: &str) -> Result<Ticket> {
        self.ensure_exists(id)?;
        validation::require("assignee", assignee)?;
        self.update_column(id, "UPDATE tickets SET assignee = ?1 WHERE id = ?2", assignee)?;
        info!(%id, assignee, "assigned ticket");
        self.get(id)
    }

    /// Append a note on its own line
    pub fn add_note(&self, id: TicketId, note: &str) -> Result<Ticket> {
        self.ensure_exists(id)?;
        validation::require("note", note)?;
        self.update_column(
            id,
            "UPDATE tickets
             SET notes = CASE WHEN notes = '' THEN ?1 ELSE notes || char(10) || ?1 END
             WHERE id = ?2",
            note,
        )?;
        info!(%id, "added note to ticket");
        self.get(id)
    }

    /// Tickets whose title or notes contain `query`, ignoring ASCII case
    pub fn search(&self, query: &str) -> Result<Vec<Ticket>> {
        validation::require("query", query)?;
        let pattern = format!("%{}%", escape_like(query));

        let mut stmt = self.conn.prepare(&format!(
            r"SELECT {TICKET_COLUMNS} FROM tickets
              WHERE title LIKE ?1 ESCAPE '\' OR notes LIKE ?1 ESCAPE '\'
              ORDER BY id ASC"
        ))?;
        let tickets = stmt
            .query_map([pattern], ticket_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(query, matches = tickets.len(), "searched tickets");
        Ok(tickets)
    }

    /// Ticket counts grouped by status and by priority
    pub fn stats(&self) -> Result<TicketStats> {
        let by_status = self.group_counts("status")?;
        let by_priority = self.group_counts("priority")?;
        let total = by_status.values().sum();

        Ok(TicketStats {
            total,
            by_status,
            by_priority,
        })
    }

    /// Write every ticket to `path` as CSV, returning the row count
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.export(path, ExportFormat::Csv)
    }

    /// Write every ticket to `path` in the given format
    pub fn export(&self, path: impl AsRef<Path>, format: ExportFormat) -> Result<usize> {
        let path = path.as_ref();
        let tickets = self.list_all()?;
        let count = format.write_to_path(path, &tickets)?;
        info!(path = %path.display(), ?format, count, "exported tickets");
        Ok(count)
    }

    fn ensure_exists(&self, id: TicketId) -> Result<()> {
        self.conn
            .query_row("SELECT 1 FROM tickets WHERE id = ?1", [id], |_| Ok(()))
            .optional()?
            .ok_or(HelpdeskError::TicketNotFound { id: id.get() })
    }

    fn update_column(&self, id: TicketId, sql: &str, value: &str) -> Result<()> {
        let changed = self.conn.execute(sql, params![value, id])?;
        if changed == 0 {
            return Err(HelpdeskError::TicketNotFound { id: id.get() });
        }
        Ok(())
    }

    fn group_counts(&self, column: &'static str) -> Result<BTreeMap<String, usize>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {column}, COUNT(*) FROM tickets GROUP BY {column}"
        ))?;
        let rows = stmt.query_map([], |row| {
            let label: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((label, usize::try_from(count).unwrap_or_default()))
        })?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let (label, count) = row?;
            counts.insert(label, count);
        }
        Ok(counts)
    }
}

impl ToSql for TicketId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.get()))
    }
}

impl FromSql for TicketId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::new)
    }
}

fn ticket_from_row(row: &Row<'_>) -> rusqlite::Result<Ticket> {
    let created_at: String = row.get(7)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(Ticket {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        priority: row.get(3)?,
        assignee: row.get(4)?,
        status: row.get(5)?,
        notes: row.get(6)?,
        created_at,
    })
}

/// Escape `LIKE` wildcards so the query matches literally
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
