//! Snapshot: the unit of synchronization for one sector.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CalendarEvent, Employee, GlobalConfig, RemoteConfig};

/// Complete persisted state of one sector at a point in time.
///
/// A snapshot is always replaced as a unit; there is no field-level
/// merge between snapshots from different sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    pub events: Vec<CalendarEvent>,
    pub config: GlobalConfig,
}

/// Outgoing document written to the remote store under the plant id:
/// the full global config plus one snapshot per known sector.
#[derive(Debug, Clone, Serialize)]
pub struct SyncDocument {
    pub config: GlobalConfig,
    pub sectors: BTreeMap<String, Snapshot>,
}

/// Incoming document as read back from the remote store.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteDocument {
    #[serde(default)]
    pub config: Option<RemoteConfig>,
    #[serde(default)]
    pub sectors: BTreeMap<String, Snapshot>,
}
