use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo task.
///
/// The wire format is camelCase (`id`, `description`, `isCompleted`) to
/// match what the browser client sends and expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Globally unique identifier, immutable after creation.
    pub id: Uuid,
    pub description: String,
    /// Completed items are hidden from the default listing but stay
    /// retrievable by id.
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItem {
    /// Creates a new incomplete item with a generated identifier.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            is_completed: false,
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Marks the item as completed.
    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }
}
