//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Readiness probe (active storage check)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Readiness probe (active storage check).
///
/// Issues a cheap listing query to verify the persistence backend is
/// reachable. Returns 200 when healthy, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.item_repo.list_incomplete_items().await {
        Ok(items) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "incomplete_items": items.len(),
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "healthy": false,
                "error": e.to_string(),
            })),
        )
            .into_response(),
    }
}
