//! Database schema and migrations for anonboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Boards table - one row per board aggregate
    r#"
-- Boards table. Each row stores a full board aggregate (threads and
-- replies nested) as a JSON document. The name column is the lookup
-- key and is deliberately NOT unique: lookups take the first match by
-- row id.
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    doc         TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_boards_name ON boards(name);
"#,
];
