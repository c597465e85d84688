use super::error::ItemError;
use super::requests::CreateItemRequest;

/// Validates the description of a candidate item.
///
/// Returns the description when present and non-empty. Whitespace-only
/// descriptions are accepted; only absence and emptiness fail.
pub fn validate_description(request: &CreateItemRequest) -> Result<&str, ItemError> {
    match request.description.as_deref() {
        Some(description) if !description.is_empty() => Ok(description),
        _ => Err(ItemError::MissingDescription),
    }
}

/// Case-insensitive description equality, as used by the duplicate check
/// among incomplete items.
pub fn descriptions_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
