//! Item CRUD handlers.
//!
//! This is the gateway between the HTTP surface and the persistence
//! backend: it owns the validation rules, the uniqueness checks, and the
//! status-code semantics. Error bodies are plain strings, and the order in
//! which the create checks fire is part of the observable contract.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use todolist_core::storage::RepositoryError;
use todolist_core::todo::{
    item_error_to_status_code, validate_description, CreateItemRequest, ItemError, TodoItem,
};

use crate::{handlers::AppError, state::AppState};

/// Error response with message (for validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Error response for a gateway failure, using its wire message.
fn item_error(error: ItemError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(item_error_to_status_code(&error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, error.to_string())
}

// ============================================================================
// List Items
// ============================================================================

/// List all incomplete items (GET /items).
///
/// Completed items are filtered out; there is no pagination or ordering.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = state.item_repo.list_incomplete_items().await?;
    Ok(Json(items))
}

// ============================================================================
// Get Item
// ============================================================================

/// Get a single item by ID (GET /items/{id}).
///
/// Completed and incomplete items are both retrievable.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoItem>, (StatusCode, String)> {
    let item = state
        .item_repo
        .get_item(id)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| item_error(ItemError::NotFound))?;

    Ok(Json(item))
}

// ============================================================================
// Create Item
// ============================================================================

/// Create a new item (POST /items).
///
/// The checks fire in a fixed order so the reported error is deterministic
/// when several conditions hold at once: empty item, then missing
/// description, then duplicate description, then duplicate identifier.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Option<CreateItemRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Json(payload) = payload.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse request body: {e}"),
        )
    })?;

    // A JSON `null` body deserializes to None.
    let Some(payload) = payload else {
        return Err(item_error(ItemError::EmptyItem));
    };

    tracing::debug!(payload = ?payload, "Received create item request");

    let description = validate_description(&payload).map_err(item_error)?.to_string();

    let duplicate = state
        .item_repo
        .find_incomplete_by_description(&description)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    if duplicate.is_some() {
        return Err(item_error(ItemError::DuplicateDescription));
    }

    // An explicit identifier must be unused; lenient deserialization has
    // already turned empty, nil, and malformed ids into None.
    let id = match payload.id {
        Some(id) => {
            let existing = state
                .item_repo
                .get_item(id)
                .await
                .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
            if existing.is_some() {
                return Err(item_error(ItemError::DuplicateIdentifier));
            }
            id
        }
        None => Uuid::new_v4(),
    };

    let item = payload
        .into_item(id)
        .ok_or_else(|| item_error(ItemError::MissingDescription))?;

    // The storage key constraint closes the read-then-check race between
    // two concurrent creates with the same explicit identifier.
    state.item_repo.create_item(&item).await.map_err(|e| match e {
        RepositoryError::AlreadyExists { .. } => item_error(ItemError::DuplicateIdentifier),
        e => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    tracing::info!(item_id = %item.id, description = %item.description, "Created new item");

    let location = format!("/items/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

// ============================================================================
// Update Item
// ============================================================================

/// Update an item by ID (PUT /items/{id}).
///
/// Replaces the stored item wholesale, completion flag included, and
/// answers 204 with no body. A stale-write conflict from the backend is
/// not translated here; it surfaces as a server error.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<TodoItem>, JsonRejection>,
) -> Result<StatusCode, (StatusCode, String)> {
    let Json(item) = payload.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse request body: {e}"),
        )
    })?;

    tracing::debug!(item_id = %id, payload = ?item, "Received update item request");

    if id != item.id {
        return Err(item_error(ItemError::IdentifierMismatch));
    }

    let existing = state
        .item_repo
        .get_item(id)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    if existing.is_none() {
        return Err(item_error(ItemError::NotFound));
    }

    state.item_repo.update_item(&item).await.map_err(|e| match e {
        RepositoryError::NotFound { .. } => item_error(ItemError::NotFound),
        e => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    tracing::info!(item_id = %id, "Updated item");

    Ok(StatusCode::NO_CONTENT)
}
