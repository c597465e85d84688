//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use rusqlite::Row;
use uuid::Uuid;

use todolist_core::todo::TodoItem;

/// Convert a SQLite row to a TodoItem.
///
/// Expected columns: id, description, is_completed
pub fn row_to_item(row: &Row) -> rusqlite::Result<TodoItem> {
    let id: String = row.get(0)?;
    let description: String = row.get(1)?;
    let is_completed: bool = row.get(2)?;

    Ok(TodoItem {
        id: parse_uuid(&id)?,
        description,
        is_completed,
    })
}

/// Parse a UUID from its stored text form.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }
}
