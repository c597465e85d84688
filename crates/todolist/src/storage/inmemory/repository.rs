//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use todolist_core::storage::{ItemRepository, RepositoryError, Result};
use todolist_core::todo::{descriptions_match, TodoItem};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<Uuid, TodoItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: Uuid) -> Result<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_incomplete_items(&self) -> Result<Vec<TodoItem>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| !item.is_completed)
            .cloned()
            .collect())
    }

    async fn find_incomplete_by_description(
        &self,
        description: &str,
    ) -> Result<Option<TodoItem>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .find(|item| {
                !item.is_completed && descriptions_match(&item.description, description)
            })
            .cloned())
    }

    async fn create_item(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "TodoItem",
                id: item.id.to_string(),
            });
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &TodoItem) -> Result<()> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "TodoItem",
                id: item.id.to_string(),
            });
        }
        items.insert(item.id, item.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let item = TodoItem::new("Buy milk");

        repo.create_item(&item).await.unwrap();

        let retrieved = repo.get_item(item.id).await.unwrap();
        assert_eq!(retrieved, Some(item));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_item(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_id() {
        let repo = InMemoryRepository::new();
        let item = TodoItem::new("Buy milk");

        repo.create_item(&item).await.unwrap();

        let duplicate = TodoItem::new("Walk the dog").with_id(item.id);
        let result = repo.create_item(&duplicate).await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryRepository::new();
        let mut item = TodoItem::new("Buy milk");

        repo.create_item(&item).await.unwrap();

        item.is_completed = true;
        repo.update_item(&item).await.unwrap();

        let retrieved = repo.get_item(item.id).await.unwrap().unwrap();
        assert!(retrieved.is_completed);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let item = TodoItem::new("Buy milk");

        let result = repo.update_item(&item).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_filters_completed_items() {
        let repo = InMemoryRepository::new();

        let open = TodoItem::new("Buy milk");
        let done = TodoItem::new("Walk the dog").completed();

        repo.create_item(&open).await.unwrap();
        repo.create_item(&done).await.unwrap();

        let items = repo.list_incomplete_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, open.id);
    }

    #[tokio::test]
    async fn test_find_incomplete_by_description_ignores_case() {
        let repo = InMemoryRepository::new();
        let item = TodoItem::new("Buy milk");

        repo.create_item(&item).await.unwrap();

        let found = repo
            .find_incomplete_by_description("BUY MILK")
            .await
            .unwrap();
        assert_eq!(found, Some(item));
    }

    #[tokio::test]
    async fn test_find_incomplete_by_description_skips_completed() {
        let repo = InMemoryRepository::new();
        let item = TodoItem::new("Buy milk").completed();

        repo.create_item(&item).await.unwrap();

        let found = repo
            .find_incomplete_by_description("Buy milk")
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
