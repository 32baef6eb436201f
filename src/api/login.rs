//! Login endpoint.
//!
//! Credentials are matched against the registered users (stored in
//! plaintext, a gap inherited from the source data model) plus an
//! optional master account configured through the environment. A
//! successful login is audited and registers the calling device.

use axum::{extract::State, http::HeaderMap, Json};

use super::{error, success, ApiResult};
use crate::auth::constant_time_compare;
use crate::errors::AppError;
use crate::models::{LoginRequest, User};
use crate::sync::master_user;
use crate::AppState;

/// POST /api/auth/login - Authenticate a user.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> ApiResult<User> {
    let sync_status = state.store.status().await.as_str();

    let user = match authenticate(&state, &request).await {
        Some(user) => user,
        None => return error(AppError::InvalidCredentials, sync_status),
    };

    let device_name = request
        .device_name
        .as_deref()
        .unwrap_or("Desktop Terminal");
    let device_ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .unwrap_or("unknown")
        .trim();

    match state.store.record_login(&user, device_name, device_ip).await {
        Ok(()) => success(user.sanitized(), sync_status),
        Err(e) => error(e, sync_status),
    }
}

async fn authenticate(state: &AppState, request: &LoginRequest) -> Option<User> {
    if let (Some(master), Some(password)) =
        (&state.config.master_user, &state.config.master_password)
    {
        if constant_time_compare(&request.username, master)
            && constant_time_compare(&request.password, password)
        {
            return Some(master_user(master));
        }
    }

    let user = state.store.find_user(&request.username).await?;
    let stored = user.password.as_deref()?;
    if constant_time_compare(stored, &request.password) {
        Some(user)
    } else {
        None
    }
}
