//! Synced device model.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered devices.
pub const DEVICE_LIST_CAP: usize = 10;

/// A device that has logged into this plant's data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub location: String,
    pub last_seen: String,
    pub is_online: bool,
}
