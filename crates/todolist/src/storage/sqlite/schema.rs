//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Todo items table
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0
);

-- Indexes for the incomplete listing and the duplicate-description check
CREATE INDEX IF NOT EXISTS idx_items_is_completed ON items(is_completed);
CREATE INDEX IF NOT EXISTS idx_items_description ON items(description COLLATE NOCASE);
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (id, description, is_completed)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, description, is_completed
FROM items
WHERE id = ?1
"#;

pub const SELECT_INCOMPLETE_ITEMS: &str = r#"
SELECT id, description, is_completed
FROM items
WHERE is_completed = 0
"#;

pub const SELECT_INCOMPLETE_ITEM_BY_DESCRIPTION: &str = r#"
SELECT id, description, is_completed
FROM items
WHERE is_completed = 0 AND LOWER(description) = LOWER(?1)
LIMIT 1
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET description = ?2, is_completed = ?3
WHERE id = ?1
"#;
