use rusqlite::Connection;

/// The fixed ticket table.
///
/// `AUTOINCREMENT` keeps ids strictly increasing and never reused. The
/// triggers keep `created_at` immutable and rows undeletable.
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS tickets (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL CHECK (length(trim(title)) > 0),
    category    TEXT NOT NULL,
    priority    TEXT NOT NULL,
    assignee    TEXT NOT NULL,
    status      TEXT NOT NULL CHECK (length(trim(status)) > 0),
    notes       TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL
);

CREATE TRIGGER IF NOT EXISTS tickets_created_at_immutable
BEFORE UPDATE OF created_at ON tickets
BEGIN
    SELECT RAISE(ABORT, 'created_at is immutable');
END;

CREATE TRIGGER IF NOT EXISTS tickets_no_delete
BEFORE DELETE ON tickets
BEGIN
    SELECT RAISE(ABORT, 'tickets cannot be deleted');
END;
";

/// Create the ticket table and its triggers if they do not exist yet
pub(super) fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
