use async_trait::async_trait;
use uuid::Uuid;

use crate::todo::TodoItem;

use super::Result;

/// Repository for todo item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID, completed or not.
    async fn get_item(&self, id: Uuid) -> Result<Option<TodoItem>>;

    /// Gets all items whose completion flag is false, in unspecified order.
    async fn list_incomplete_items(&self) -> Result<Vec<TodoItem>>;

    /// Finds an incomplete item whose description matches the given one,
    /// compared case-insensitively. Completed items never match.
    async fn find_incomplete_by_description(&self, description: &str)
        -> Result<Option<TodoItem>>;

    /// Creates a new item. The key must be unique across all items,
    /// completed ones included.
    async fn create_item(&self, item: &TodoItem) -> Result<()>;

    /// Replaces an existing item wholesale.
    ///
    /// Backends that detect a stale write surface
    /// [`RepositoryError::Conflict`](super::RepositoryError::Conflict);
    /// callers do not recover from it.
    async fn update_item(&self, item: &TodoItem) -> Result<()>;
}
