//! Synchronization API endpoints.

use axum::extract::State;
use serde::Serialize;

use super::{error, settings::sanitize_snapshot, success, ApiResult};
use crate::models::Snapshot;
use crate::AppState;

/// Sync state as shown by the presentation layer's indicator.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
    pub cloud_mode: bool,
}

/// GET /api/snapshot - The active sector's full snapshot.
pub async fn get_snapshot(State(state): State<AppState>) -> ApiResult<Snapshot> {
    let sync_status = state.store.status().await.as_str();
    success(sanitize_snapshot(state.store.snapshot().await), sync_status)
}

/// GET /api/sync/status - Current sync status.
pub async fn sync_status(State(state): State<AppState>) -> ApiResult<SyncStatusResponse> {
    let status = state.store.status().await;
    let global = state.store.global().await;
    success(
        SyncStatusResponse {
            status: status.as_str().to_string(),
            last_sync: global.last_sync,
            cloud_mode: global.cloud_mode,
        },
        status.as_str(),
    )
}

/// POST /api/sync/pull - Remote → local reconciliation. Returns whether
/// a remote document was found and applied.
pub async fn sync_pull(State(state): State<AppState>) -> ApiResult<bool> {
    match state.store.pull().await {
        Ok(applied) => {
            let sync_status = state.store.status().await.as_str();
            success(applied, sync_status)
        }
        Err(e) => {
            let sync_status = state.store.status().await.as_str();
            error(e, sync_status)
        }
    }
}

/// POST /api/sync/push - Local → remote replacement of the plant document.
pub async fn sync_push(State(state): State<AppState>) -> ApiResult<()> {
    match state.store.push().await {
        Ok(()) => {
            let sync_status = state.store.status().await.as_str();
            success((), sync_status)
        }
        Err(e) => {
            let sync_status = state.store.status().await.as_str();
            error(e, sync_status)
        }
    }
}
