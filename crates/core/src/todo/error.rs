use thiserror::Error;

/// Gateway validation and lookup failures.
///
/// The display strings are the exact plain-text bodies the API returns to
/// clients, so they must not change without coordinating with consumers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item is empty")]
    EmptyItem,
    #[error("Description is required")]
    MissingDescription,
    #[error("Description already exists")]
    DuplicateDescription,
    #[error("GUID already exists in DB")]
    DuplicateIdentifier,
    #[error("Mismatch of ID")]
    IdentifierMismatch,
    #[error("Item not found")]
    NotFound,
}

/// Maps an [`ItemError`] to an HTTP status code.
///
/// Missing entities are 404; every validation failure is a 400.
pub fn item_error_to_status_code(error: &ItemError) -> u16 {
    match error {
        ItemError::NotFound => 404,
        _ => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(ItemError::EmptyItem.to_string(), "Item is empty");
        assert_eq!(
            ItemError::MissingDescription.to_string(),
            "Description is required"
        );
        assert_eq!(
            ItemError::DuplicateDescription.to_string(),
            "Description already exists"
        );
        assert_eq!(
            ItemError::DuplicateIdentifier.to_string(),
            "GUID already exists in DB"
        );
        assert_eq!(ItemError::IdentifierMismatch.to_string(), "Mismatch of ID");
        assert_eq!(ItemError::NotFound.to_string(), "Item not found");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(item_error_to_status_code(&ItemError::NotFound), 404);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        for error in [
            ItemError::EmptyItem,
            ItemError::MissingDescription,
            ItemError::DuplicateDescription,
            ItemError::DuplicateIdentifier,
            ItemError::IdentifierMismatch,
        ] {
            assert_eq!(item_error_to_status_code(&error), 400);
        }
    }
}
