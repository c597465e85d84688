//! Item API operations.

use uuid::Uuid;

use todolist_core::todo::{CreateItemRequest, TodoItem};

use super::TodolistClient;
use crate::error::Result;

impl TodolistClient {
    /// List incomplete items.
    pub async fn list_items(&self) -> Result<Vec<TodoItem>> {
        let response = self.client.get(self.url("/items")).send().await?;
        self.handle_response(response).await
    }

    /// Get an item by ID, completed or not.
    pub async fn get_item(&self, id: Uuid) -> Result<TodoItem> {
        let response = self
            .client
            .get(self.url(&format!("/items/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new item.
    pub async fn create_item(&self, req: CreateItemRequest) -> Result<TodoItem> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace an item wholesale. The server answers 204 with no body.
    pub async fn update_item(&self, item: &TodoItem) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/items/{}", item.id)))
            .json(item)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Mark an item as completed and return its new state.
    pub async fn complete_item(&self, id: Uuid) -> Result<TodoItem> {
        let mut item = self.get_item(id).await?;
        item.is_completed = true;
        self.update_item(&item).await?;
        Ok(item)
    }
}
