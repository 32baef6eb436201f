//! User management API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::auth::Actor;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::AppState;

/// GET /api/users - List registered users. Passwords are stripped.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let sync_status = state.store.status().await.as_str();
    let users = state
        .store
        .list_users()
        .await
        .iter()
        .map(User::sanitized)
        .collect::<Vec<_>>();
    success(users, sync_status)
}

/// POST /api/users - Create a new user.
pub async fn create_user(
    State(state): State<AppState>,
    actor: Actor,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<User> {
    let sync_status = state.store.status().await.as_str();

    if request.username.trim().is_empty() {
        return error(
            AppError::Validation("Username is required".to_string()),
            sync_status,
        );
    }
    if request.password.is_empty() {
        return error(
            AppError::Validation("Password is required".to_string()),
            sync_status,
        );
    }

    match state.store.create_user(&actor, &request).await {
        Ok(user) => success(user.sanitized(), sync_status),
        Err(e) => error(e, sync_status),
    }
}

/// PUT /api/users/:id - Update a user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    actor: Actor,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<User> {
    let sync_status = state.store.status().await.as_str();

    match state.store.update_user(&actor, &id, &request).await {
        Ok(user) => success(user.sanitized(), sync_status),
        Err(e) => error(e, sync_status),
    }
}

/// DELETE /api/users/:id - Delete a user.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    actor: Actor,
) -> ApiResult<()> {
    let sync_status = state.store.status().await.as_str();

    match state.store.delete_user(&actor, &id).await {
        Ok(()) => success((), sync_status),
        Err(e) => error(e, sync_status),
    }
}
