//! Audit log model.

use serde::{Deserialize, Serialize};

/// Maximum number of retained audit entries, newest first.
pub const AUDIT_LOG_CAP: usize = 1000;

/// Kind of audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
}

/// An immutable audit record. Entries are only ever appended and
/// trimmed by the retention cap, never edited or individually removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub action: AuditAction,
    pub details: String,
    pub sector: String,
    pub timestamp: String,
}
