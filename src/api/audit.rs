//! Audit log API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::AuditEntry;
use crate::AppState;

/// GET /api/audit - The audit log, newest first.
pub async fn list_audit(State(state): State<AppState>) -> ApiResult<Vec<AuditEntry>> {
    let sync_status = state.store.status().await.as_str();
    success(state.store.audit_log().await, sync_status)
}
