//! Serde helper functions for request deserialization.
//!
//! These functions handle the quirks of client-submitted JSON where
//! optional fields arrive as null or empty strings rather than being
//! omitted entirely.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserialize an optional string, treating empty strings as None.
///
/// Whitespace-only strings are kept: presence is decided by emptiness
/// alone, matching the gateway's description rules.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize an optional UUID leniently.
///
/// Clients may send null, an empty string, the nil UUID, or a value that
/// does not parse as a UUID at all; each of these normalizes to `None` so
/// the caller can generate a fresh identifier instead.
pub fn deserialize_lenient_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| Uuid::parse_str(s.trim()).ok())
        .filter(|id| !id.is_nil()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_uuid")]
        uuid_field: Option<Uuid>,
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_whitespace_string_is_kept() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(parsed.string_field, Some("   ".to_string()));
    }

    #[test]
    fn test_null_string_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": null}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_valid_uuid_is_parsed() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"uuid_field": "{id}"}}"#);
        let parsed: TestStruct = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.uuid_field, Some(id));
    }

    #[test]
    fn test_malformed_uuid_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"uuid_field": "not-a-guid"}"#).unwrap();
        assert_eq!(parsed.uuid_field, None);
    }

    #[test]
    fn test_nil_uuid_becomes_none() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"uuid_field": "00000000-0000-0000-0000-000000000000"}"#)
                .unwrap();
        assert_eq!(parsed.uuid_field, None);
    }

    #[test]
    fn test_null_and_missing_uuid_become_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"uuid_field": null}"#).unwrap();
        assert_eq!(parsed.uuid_field, None);

        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.uuid_field, None);
    }
}
