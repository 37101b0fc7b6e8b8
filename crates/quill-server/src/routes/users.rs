//! User management handlers

use axum::extract::{Path, State};
use axum::Json;

use quill_core::{UpdateUserRequest, UserResponse};

use super::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(state.auth.list_users().await?))
}

/// GET /users/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.auth.get_user(&id).await?))
}

/// PUT /users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.auth.update_user(&id, request).await?))
}

/// DELETE /users/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.auth.delete_user(&id).await?;
    Ok(Json(Message {
        message: "user deleted",
    }))
}
