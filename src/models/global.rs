//! Process-wide configuration, independent of any single sector.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{AuditEntry, DeviceInfo, User, AUDIT_LOG_CAP, DEVICE_LIST_CAP};

/// Global settings plus the aggregates they own: the user list, the
/// capped audit log and the synced-device list.
///
/// The config is a single owned aggregate; all mutation goes through
/// the store's explicit update operation rather than ad hoc field
/// assignment from call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConfig {
    pub authorized_count: u32,
    pub dark_mode: bool,
    pub sector_name: String,
    pub responsible_name: String,
    pub users: Vec<User>,
    pub audit_log: Vec<AuditEntry>,
    pub cloud_sync_id: Option<String>,
    #[serde(rename = "isCloudMode")]
    pub cloud_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
    pub synced_devices: Vec<DeviceInfo>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            authorized_count: 40,
            dark_mode: false,
            sector_name: "Setor 1".to_string(),
            responsible_name: "Supervisor".to_string(),
            users: Vec::new(),
            audit_log: Vec::new(),
            cloud_sync_id: None,
            cloud_mode: false,
            last_sync: None,
            synced_devices: Vec::new(),
        }
    }
}

impl GlobalConfig {
    /// Prepend an audit entry, keeping the newest `AUDIT_LOG_CAP` entries.
    pub fn push_audit(&mut self, entry: AuditEntry) {
        self.audit_log.insert(0, entry);
        self.audit_log.truncate(AUDIT_LOG_CAP);
    }

    /// Register a device, deduplicated by name: an existing entry with
    /// the same name is replaced and moved to the head. Keeps at most
    /// `DEVICE_LIST_CAP` entries.
    pub fn register_device(&mut self, device: DeviceInfo) {
        self.synced_devices.retain(|d| d.name != device.name);
        self.synced_devices.insert(0, device);
        self.synced_devices.truncate(DEVICE_LIST_CAP);
    }

    /// Copy of this config with user passwords stripped, for API
    /// responses. Persistence and sync keep the full value.
    pub fn sanitized(&self) -> GlobalConfig {
        GlobalConfig {
            users: self.users.iter().map(User::sanitized).collect(),
            ..self.clone()
        }
    }

    /// Every sector identifier referenced by a user assignment.
    pub fn sector_ids(&self) -> BTreeSet<String> {
        self.users
            .iter()
            .flat_map(|u| u.sectors.iter().map(|s| s.sector_id.clone()))
            .collect()
    }

    /// Shallow per-key override from a remote document's config: each
    /// field the remote supplies replaces the local value, absent
    /// fields keep the local value. Not a deep merge.
    pub fn apply_remote(&mut self, remote: RemoteConfig) {
        if let Some(v) = remote.authorized_count {
            self.authorized_count = v;
        }
        if let Some(v) = remote.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = remote.sector_name {
            self.sector_name = v;
        }
        if let Some(v) = remote.responsible_name {
            self.responsible_name = v;
        }
        if let Some(v) = remote.users {
            self.users = v;
        }
        if let Some(v) = remote.audit_log {
            self.audit_log = v;
        }
        if let Some(v) = remote.cloud_sync_id {
            self.cloud_sync_id = Some(v);
        }
        if let Some(v) = remote.cloud_mode {
            self.cloud_mode = v;
        }
        if let Some(v) = remote.last_sync {
            self.last_sync = Some(v);
        }
        if let Some(v) = remote.synced_devices {
            self.synced_devices = v;
        }
    }
}

/// Request body for updating global settings. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSettingsRequest {
    pub authorized_count: Option<u32>,
    pub dark_mode: Option<bool>,
    pub sector_name: Option<String>,
    pub responsible_name: Option<String>,
    pub cloud_sync_id: Option<String>,
    #[serde(rename = "isCloudMode")]
    pub cloud_mode: Option<bool>,
}

/// Config shape as read back from the remote store. Every field is
/// optional so a partial or older document never clears local state it
/// does not mention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteConfig {
    pub authorized_count: Option<u32>,
    pub dark_mode: Option<bool>,
    pub sector_name: Option<String>,
    pub responsible_name: Option<String>,
    pub users: Option<Vec<User>>,
    pub audit_log: Option<Vec<AuditEntry>>,
    pub cloud_sync_id: Option<String>,
    #[serde(rename = "isCloudMode")]
    pub cloud_mode: Option<bool>,
    pub last_sync: Option<String>,
    pub synced_devices: Option<Vec<DeviceInfo>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuditAction;

    fn entry(n: usize) -> AuditEntry {
        AuditEntry {
            id: format!("e{}", n),
            user_id: "u1".to_string(),
            username: "adm".to_string(),
            action: AuditAction::Create,
            details: format!("entry {}", n),
            sector: "Setor 1".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn device(name: &str) -> DeviceInfo {
        DeviceInfo {
            id: name.to_string(),
            name: name.to_string(),
            ip: "192.168.0.10".to_string(),
            location: "Unidade Central".to_string(),
            last_seen: "2026-01-01T00:00:00Z".to_string(),
            is_online: true,
        }
    }

    #[test]
    fn audit_log_is_capped_with_newest_at_head() {
        let mut config = GlobalConfig::default();
        for n in 0..=AUDIT_LOG_CAP {
            config.push_audit(entry(n));
        }

        assert_eq!(config.audit_log.len(), AUDIT_LOG_CAP);
        // The 1001st entry is at the head; the very first was evicted.
        assert_eq!(config.audit_log[0].id, format!("e{}", AUDIT_LOG_CAP));
        assert!(!config.audit_log.iter().any(|e| e.id == "e0"));
    }

    #[test]
    fn device_registration_dedups_by_name() {
        let mut config = GlobalConfig::default();
        config.register_device(device("Terminal A"));
        config.register_device(device("Terminal B"));
        config.register_device(device("Terminal A"));

        assert_eq!(config.synced_devices.len(), 2);
        assert_eq!(config.synced_devices[0].name, "Terminal A");
        assert_eq!(config.synced_devices[1].name, "Terminal B");
    }

    #[test]
    fn device_list_never_exceeds_cap() {
        let mut config = GlobalConfig::default();
        for n in 0..15 {
            config.register_device(device(&format!("Terminal {}", n)));
        }
        assert_eq!(config.synced_devices.len(), DEVICE_LIST_CAP);
        assert_eq!(config.synced_devices[0].name, "Terminal 14");
    }

    #[test]
    fn remote_merge_keeps_local_for_absent_keys() {
        let mut config = GlobalConfig::default();
        config.sector_name = "Setor 3".to_string();
        config.register_device(device("Terminal A"));

        let remote: RemoteConfig =
            serde_json::from_str(r#"{"darkMode":true,"lastSync":"2026-02-01T00:00:00Z"}"#).unwrap();
        config.apply_remote(remote);

        assert!(config.dark_mode);
        assert_eq!(config.last_sync.as_deref(), Some("2026-02-01T00:00:00Z"));
        // Keys the remote did not supply are untouched.
        assert_eq!(config.sector_name, "Setor 3");
        assert_eq!(config.synced_devices.len(), 1);
    }
}
