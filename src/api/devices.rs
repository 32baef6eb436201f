//! Synced devices API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::DeviceInfo;
use crate::AppState;

/// GET /api/devices - Devices that have logged into this plant, newest first.
pub async fn list_devices(State(state): State<AppState>) -> ApiResult<Vec<DeviceInfo>> {
    let sync_status = state.store.status().await.as_str();
    success(state.store.devices().await, sync_status)
}
