//! Global settings and sector API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::auth::Actor;
use crate::models::{GlobalConfig, Snapshot, UpdateSettingsRequest};
use crate::AppState;

/// GET /api/config - The global config, with passwords stripped.
pub async fn get_config(State(state): State<AppState>) -> ApiResult<GlobalConfig> {
    let sync_status = state.store.status().await.as_str();
    success(state.store.global().await.sanitized(), sync_status)
}

/// PUT /api/config - Update global settings.
pub async fn update_config(
    State(state): State<AppState>,
    actor: Actor,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<GlobalConfig> {
    let sync_status = state.store.status().await.as_str();

    match state.store.update_settings(&actor, request).await {
        Ok(global) => {
            // The update may have triggered a pull; report the fresh status.
            let sync_status = state.store.status().await.as_str();
            success(global.sanitized(), sync_status)
        }
        Err(e) => error(e, sync_status),
    }
}

/// One known sector in the registry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub sector_id: String,
    pub label: Option<String>,
    pub authorized_count: Option<u32>,
    pub active: bool,
}

/// GET /api/sectors - The sector registry.
pub async fn list_sectors(State(state): State<AppState>) -> ApiResult<Vec<SectorSummary>> {
    let sync_status = state.store.status().await.as_str();

    let global = state.store.global().await;
    let active = state.store.active_sector().await;
    let sectors = state
        .store
        .known_sectors()
        .await
        .into_iter()
        .map(|sector_id| {
            let assignment = global
                .users
                .iter()
                .flat_map(|u| u.sectors.iter())
                .find(|s| s.sector_id == sector_id);
            SectorSummary {
                active: sector_id == active,
                label: assignment.map(|a| a.label.clone()),
                authorized_count: assignment.map(|a| a.authorized_count),
                sector_id,
            }
        })
        .collect::<Vec<_>>();

    success(sectors, sync_status)
}

/// POST /api/sectors/:id/activate - Switch the active sector.
pub async fn activate_sector(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Snapshot> {
    let sync_status = state.store.status().await.as_str();

    match state.store.activate_sector(&id).await {
        Ok(snapshot) => {
            let sync_status = state.store.status().await.as_str();
            success(sanitize_snapshot(snapshot), sync_status)
        }
        Err(e) => error(e, sync_status),
    }
}

pub(super) fn sanitize_snapshot(snapshot: Snapshot) -> Snapshot {
    Snapshot {
        config: snapshot.config.sanitized(),
        ..snapshot
    }
}
