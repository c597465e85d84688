//! Health check operations.

use serde::{Deserialize, Serialize};

use super::TodolistClient;
use crate::error::{ClientError, Result};

/// Server health status.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    #[serde(default)]
    pub incomplete_items: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TodolistClient {
    /// Check server liveness (GET /livez).
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }

    /// Check server readiness, including the storage backend (GET /healthz).
    pub async fn healthz(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response).await
    }
}
