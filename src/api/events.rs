//! Calendar event API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::auth::Actor;
use crate::errors::AppError;
use crate::models::{CalendarEvent, CreateEventRequest};
use crate::AppState;

/// GET /api/events - List the active sector's events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<CalendarEvent>> {
    let sync_status = state.store.status().await.as_str();
    success(state.store.list_events().await, sync_status)
}

/// POST /api/events - Append a new event.
pub async fn create_event(
    State(state): State<AppState>,
    actor: Actor,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<CalendarEvent> {
    let sync_status = state.store.status().await.as_str();

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            sync_status,
        );
    }

    match state.store.create_event(&actor, &request).await {
        Ok(event) => success(event, sync_status),
        Err(e) => error(e, sync_status),
    }
}
