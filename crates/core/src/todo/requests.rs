//! API request types for item operations.
//!
//! These types are shared between the server and client for type-safe API
//! communication. Pure data, no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_lenient_uuid, deserialize_optional_string};

use super::types::TodoItem;

/// Request payload for creating a new item.
///
/// The identifier is optional and intake is lenient: null, empty, nil, and
/// malformed values all deserialize to `None`, and the server generates a
/// fresh identifier. The description is the only required field, enforced
/// by the gateway rather than the deserializer so the "Description is
/// required" failure stays observable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl CreateItemRequest {
    /// Create a request with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: Some(description.into()),
            is_completed: None,
        }
    }

    /// Set an explicit identifier.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.is_completed = Some(completed);
        self
    }

    /// Convert into a TodoItem under the given identifier.
    ///
    /// The caller decides the final identifier (a validated explicit id or
    /// a generated one). Returns None if the description is missing.
    pub fn into_item(self, id: Uuid) -> Option<TodoItem> {
        let description = self.description?;
        Some(TodoItem {
            id,
            description,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}
