//! Database schema definitions for the template library.

use rusqlite::Connection;

/// SQL schema for the local template library.
pub const SCHEMA: &str = r#"
-- Session templates
CREATE TABLE IF NOT EXISTS session_templates (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    discipline TEXT,
    description TEXT NOT NULL DEFAULT '',
    equipment TEXT NOT NULL DEFAULT '',
    target_intensity INTEGER,
    series_json TEXT NOT NULL,
    series_rest INTEGER,
    series_rest_unit TEXT,
    visibility TEXT NOT NULL DEFAULT 'private',
    scheduled_for TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_session_templates_discipline
    ON session_templates(discipline);

CREATE INDEX IF NOT EXISTS idx_session_templates_scheduled
    ON session_templates(scheduled_for);
"#;

/// Apply the schema to a connection.
pub fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
