//! Session state and the sector-scoped synchronization protocol.
//!
//! `SyncStore` owns the active sector's snapshot and the global config
//! in memory as the single source of truth for a session. Local
//! persistence is written after every mutation; the remote store is
//! mirrored on demand (pull) and after a debounced quiet period
//! following mutations (push), both with last-write-wins semantics.

mod remote;

pub use remote::*;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::Actor;
use crate::db::{LoadOutcome, LocalStore};
use crate::errors::AppError;
use crate::models::{
    AuditAction, AuditEntry, CalendarEvent, CreateEmployeeRequest, CreateEventRequest,
    CreateUserRequest, DeviceInfo, Employee, GlobalConfig, RemoteDocument, Snapshot, SyncDocument,
    UpdateEmployeeRequest, UpdateSettingsRequest, UpdateUserRequest, User, UserRole, GROUPS,
};

/// Sector identifier used before any user assignment selects one.
pub const DEFAULT_SECTOR: &str = "sector1";

/// Observable synchronization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// No remote configured, or remote disabled; local data stands alone.
    Local,
    /// A push or pull is in flight.
    Syncing,
    /// The last remote operation succeeded.
    Synced,
    /// The last remote operation failed; recoverable by the next attempt.
    Error,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Local => "local",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Synced => "synced",
            SyncStatus::Error => "error",
        }
    }
}

/// In-memory session state: the active sector's roster plus the global
/// config, and the registry of sector identifiers known to exist.
struct Session {
    active_sector: String,
    employees: Vec<Employee>,
    events: Vec<CalendarEvent>,
    global: GlobalConfig,
    known_sectors: BTreeSet<String>,
}

impl Session {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            employees: self.employees.clone(),
            events: self.events.clone(),
            config: self.global.clone(),
        }
    }

    fn refresh_registry(&mut self) {
        self.known_sectors = self.global.sector_ids();
        self.known_sectors.insert(self.active_sector.clone());
    }
}

struct Inner {
    local: LocalStore,
    remote: Option<Arc<dyn RemoteStore>>,
    session: RwLock<Session>,
    status: RwLock<SyncStatus>,
    /// Bumped on every mutation; a debounce task only pushes if the
    /// epoch it captured is still current after the quiet period.
    push_epoch: AtomicU64,
    quiet_period: Duration,
}

/// Store for per-sector snapshots with optional remote mirroring.
#[derive(Clone)]
pub struct SyncStore {
    inner: Arc<Inner>,
}

impl SyncStore {
    /// Open the store: load the global config and the default sector
    /// from local persistence, degrading to empty defaults on absence
    /// or corruption.
    pub async fn open(
        local: LocalStore,
        remote: Option<Arc<dyn RemoteStore>>,
        quiet_period: Duration,
    ) -> Result<SyncStore, AppError> {
        let global = match local.load_global().await? {
            LoadOutcome::Present(config) => config,
            LoadOutcome::Absent => GlobalConfig::default(),
            LoadOutcome::Corrupted(_) => {
                tracing::warn!("Global config blob is corrupted, starting from defaults");
                GlobalConfig::default()
            }
        };

        let active_sector = DEFAULT_SECTOR.to_string();
        let snapshot = Self::load_or_default(&local, &active_sector).await?;

        let mut session = Session {
            active_sector,
            employees: snapshot.employees,
            events: snapshot.events,
            global,
            known_sectors: BTreeSet::new(),
        };
        session.refresh_registry();

        Ok(SyncStore {
            inner: Arc::new(Inner {
                local,
                remote,
                session: RwLock::new(session),
                status: RwLock::new(SyncStatus::Local),
                push_epoch: AtomicU64::new(0),
                quiet_period,
            }),
        })
    }

    /// Load a sector's snapshot, treating absence and corruption alike
    /// as the empty default. Corruption is logged before the reset.
    async fn load_or_default(local: &LocalStore, sector_id: &str) -> Result<Snapshot, AppError> {
        Ok(match local.load_sector(sector_id).await? {
            LoadOutcome::Present(snapshot) => snapshot,
            LoadOutcome::Absent => Snapshot::default(),
            LoadOutcome::Corrupted(_) => {
                tracing::warn!(sector = sector_id, "Sector blob is corrupted, resetting to empty");
                Snapshot::default()
            }
        })
    }

    pub async fn status(&self) -> SyncStatus {
        *self.inner.status.read().await
    }

    async fn set_status(&self, status: SyncStatus) {
        *self.inner.status.write().await = status;
    }

    /// Persist the session and, in cloud mode, restart the debounce
    /// window for an automatic push.
    async fn commit(&self, session: &Session) -> Result<(), AppError> {
        let snapshot = session.snapshot();
        self.inner
            .local
            .save_sector(&session.active_sector, &snapshot)
            .await?;
        self.inner.local.save_global(&session.global).await?;

        if session.global.cloud_mode
            && session.global.cloud_sync_id.is_some()
            && self.inner.remote.is_some()
        {
            self.schedule_push();
        }
        Ok(())
    }

    /// Restart the quiet window. Rapid successive mutations coalesce
    /// into one push; only the task holding the latest epoch fires.
    fn schedule_push(&self) {
        let epoch = self.inner.push_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(store.inner.quiet_period).await;
            if store.inner.push_epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            if let Err(err) = store.push().await {
                tracing::warn!(%err, "Debounced push failed");
            }
        });
    }

    // ==================== SYNC OPERATIONS ====================

    /// Remote → local reconciliation for the configured plant id.
    ///
    /// Remote wins for every field it supplies; only the active
    /// sector's roster is replaced, other sectors' local data stands
    /// until they become active themselves. Returns whether a remote
    /// document was applied.
    pub async fn pull(&self) -> Result<bool, AppError> {
        let Some(remote) = self.inner.remote.clone() else {
            self.set_status(SyncStatus::Local).await;
            return Ok(false);
        };
        let plant_id = {
            let session = self.inner.session.read().await;
            session.global.cloud_sync_id.clone()
        };
        let Some(plant_id) = plant_id else {
            self.set_status(SyncStatus::Local).await;
            return Ok(false);
        };

        self.set_status(SyncStatus::Syncing).await;

        match remote.read(&plant_id).await {
            Ok(Some(value)) => {
                let document: RemoteDocument = match serde_json::from_value(value) {
                    Ok(document) => document,
                    Err(err) => {
                        self.set_status(SyncStatus::Error).await;
                        return Err(AppError::Sync(format!("Malformed remote document: {}", err)));
                    }
                };

                {
                    let mut session = self.inner.session.write().await;
                    if let Some(remote_config) = document.config {
                        session.global.apply_remote(remote_config);
                    }
                    if let Some(sector) = document.sectors.get(&session.active_sector) {
                        session.employees = sector.employees.clone();
                        session.events = sector.events.clone();
                    }
                    session.refresh_registry();

                    let snapshot = session.snapshot();
                    self.inner
                        .local
                        .save_sector(&session.active_sector, &snapshot)
                        .await?;
                    self.inner.local.save_global(&session.global).await?;
                }

                self.set_status(SyncStatus::Synced).await;
                tracing::info!(plant = %plant_id, "Applied remote document");
                Ok(true)
            }
            Ok(None) => {
                // Nothing to synchronize yet; local state is authoritative.
                self.set_status(SyncStatus::Local).await;
                Ok(false)
            }
            Err(err) => {
                self.set_status(SyncStatus::Error).await;
                tracing::warn!(plant = %plant_id, %err, "Remote read failed");
                Err(AppError::Sync(format!("Remote read failed: {}", err)))
            }
        }
    }

    /// Local → remote: write the full document (global config plus one
    /// snapshot per known sector, the active one taken from memory)
    /// under the plant id, replacing whatever is there.
    pub async fn push(&self) -> Result<(), AppError> {
        let Some(remote) = self.inner.remote.clone() else {
            self.set_status(SyncStatus::Local).await;
            return Err(AppError::Sync("Remote store is not configured".to_string()));
        };

        let (plant_id, document) = {
            let session = self.inner.session.read().await;
            let Some(plant_id) = session.global.cloud_sync_id.clone() else {
                drop(session);
                self.set_status(SyncStatus::Local).await;
                return Err(AppError::Sync("No cloud sync id configured".to_string()));
            };

            let mut sectors = BTreeMap::new();
            for sector_id in &session.known_sectors {
                if let LoadOutcome::Present(snapshot) =
                    self.inner.local.load_sector(sector_id).await?
                {
                    sectors.insert(sector_id.clone(), snapshot);
                }
            }
            // The in-memory snapshot is the most current view of the
            // active sector.
            sectors.insert(session.active_sector.clone(), session.snapshot());

            let mut config = session.global.clone();
            config.last_sync = Some(Utc::now().to_rfc3339());

            (plant_id, SyncDocument { config, sectors })
        };

        self.set_status(SyncStatus::Syncing).await;

        let value = serde_json::to_value(&document)
            .map_err(|err| AppError::Internal(format!("Failed to encode document: {}", err)))?;

        match remote.write(&plant_id, &value).await {
            Ok(()) => {
                // The lastSync stamp is committed locally only once the
                // remote write is known to have succeeded.
                {
                    let mut session = self.inner.session.write().await;
                    session.global.last_sync = document.config.last_sync.clone();
                    self.inner.local.save_global(&session.global).await?;
                }
                self.set_status(SyncStatus::Synced).await;
                tracing::info!(plant = %plant_id, "Pushed document to remote");
                Ok(())
            }
            Err(err) => {
                // No rollback and no retry; the next mutation opens a
                // fresh debounce window.
                self.set_status(SyncStatus::Error).await;
                tracing::warn!(plant = %plant_id, %err, "Remote write failed");
                Err(AppError::Sync(format!("Remote write failed: {}", err)))
            }
        }
    }

    // ==================== SESSION / SECTOR OPERATIONS ====================

    /// View of the active sector's full snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.session.read().await.snapshot()
    }

    pub async fn active_sector(&self) -> String {
        self.inner.session.read().await.active_sector.clone()
    }

    pub async fn global(&self) -> GlobalConfig {
        self.inner.session.read().await.global.clone()
    }

    /// Registry of sector identifiers known to exist (user assignments
    /// plus the active sector).
    pub async fn known_sectors(&self) -> BTreeSet<String> {
        self.inner.session.read().await.known_sectors.clone()
    }

    /// Apply an explicit transform to the owned global config. All
    /// config mutation funnels through here so call sites stay
    /// explicit and the registry stays current.
    pub async fn update_global<F>(&self, transform: F) -> Result<GlobalConfig, AppError>
    where
        F: FnOnce(&mut GlobalConfig),
    {
        let mut session = self.inner.session.write().await;
        transform(&mut session.global);
        session.refresh_registry();
        self.commit(&session).await?;
        Ok(session.global.clone())
    }

    /// Switch the active sector: persist the outgoing snapshot, load
    /// the incoming one, and pull once if cloud mode is on.
    pub async fn activate_sector(&self, sector_id: &str) -> Result<Snapshot, AppError> {
        let cloud_mode = {
            let mut session = self.inner.session.write().await;
            if session.active_sector != sector_id {
                let outgoing = session.snapshot();
                self.inner
                    .local
                    .save_sector(&session.active_sector, &outgoing)
                    .await?;

                let incoming = Self::load_or_default(&self.inner.local, sector_id).await?;
                session.active_sector = sector_id.to_string();
                session.employees = incoming.employees;
                session.events = incoming.events;

                // A matching user assignment carries the sector's label
                // and authorized headcount.
                let assignment = session
                    .global
                    .users
                    .iter()
                    .flat_map(|u| u.sectors.iter())
                    .find(|s| s.sector_id == sector_id)
                    .cloned();
                if let Some(assignment) = assignment {
                    session.global.sector_name = assignment.label;
                    session.global.authorized_count = assignment.authorized_count;
                }
                session.refresh_registry();
                self.commit(&session).await?;
            }
            session.global.cloud_mode && session.global.cloud_sync_id.is_some()
        };

        if cloud_mode {
            // Failure is already reflected in the sync status; sector
            // activation itself still succeeds.
            if let Err(err) = self.pull().await {
                tracing::warn!(sector = sector_id, %err, "Pull on sector activation failed");
            }
        }

        Ok(self.snapshot().await)
    }

    /// Update global settings. Turning cloud mode on with a plant id
    /// configured triggers one pull.
    pub async fn update_settings(
        &self,
        actor: &Actor,
        request: UpdateSettingsRequest,
    ) -> Result<GlobalConfig, AppError> {
        let was_cloud = {
            let session = self.inner.session.read().await;
            session.global.cloud_mode && session.global.cloud_sync_id.is_some()
        };

        let global = self
            .update_global(|global| {
                if let Some(v) = request.authorized_count {
                    global.authorized_count = v;
                }
                if let Some(v) = request.dark_mode {
                    global.dark_mode = v;
                }
                if let Some(v) = request.sector_name {
                    global.sector_name = v;
                }
                if let Some(v) = request.responsible_name {
                    global.responsible_name = v;
                }
                if let Some(v) = request.cloud_sync_id {
                    global.cloud_sync_id = Some(v);
                }
                if let Some(v) = request.cloud_mode {
                    global.cloud_mode = v;
                }
                let entry = audit_entry(
                    actor,
                    AuditAction::Update,
                    "Atualizou configurações do sistema".to_string(),
                    &global.sector_name,
                );
                global.push_audit(entry);
            })
            .await?;

        let is_cloud = global.cloud_mode && global.cloud_sync_id.is_some();
        if is_cloud && !was_cloud {
            if let Err(err) = self.pull().await {
                tracing::warn!(%err, "Initial pull after enabling cloud mode failed");
            }
        }

        Ok(self.global().await)
    }

    // ==================== EMPLOYEE OPERATIONS ====================

    pub async fn list_employees(&self) -> Vec<Employee> {
        self.inner.session.read().await.employees.clone()
    }

    pub async fn create_employee(
        &self,
        actor: &Actor,
        request: &CreateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        if !GROUPS.contains(&request.group) {
            return Err(AppError::Validation(format!(
                "Group must be between {} and {}",
                GROUPS.start(),
                GROUPS.end()
            )));
        }

        let mut session = self.inner.session.write().await;
        if session
            .employees
            .iter()
            .any(|e| e.registration == request.registration)
        {
            return Err(AppError::Validation(format!(
                "Registration {} already exists in this sector",
                request.registration
            )));
        }

        let now = Utc::now().to_rfc3339();
        let employee = Employee {
            id: uuid::Uuid::new_v4().to_string(),
            group: request.group,
            registration: request.registration.clone(),
            name: request.name.clone(),
            role: request.role,
            status: request.status,
            status_date: now.clone(),
            contact: request.contact.clone(),
            created_at: now,
        };
        session.employees.push(employee.clone());

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Create,
            format!("Cadastrou novo funcionário: {}", employee.name),
            &sector,
        );
        session.global.push_audit(entry);

        self.commit(&session).await?;
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        actor: &Actor,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        if let Some(group) = request.group {
            if !GROUPS.contains(&group) {
                return Err(AppError::Validation(format!(
                    "Group must be between {} and {}",
                    GROUPS.start(),
                    GROUPS.end()
                )));
            }
        }

        let mut session = self.inner.session.write().await;

        if let Some(registration) = &request.registration {
            if session
                .employees
                .iter()
                .any(|e| e.id != id && &e.registration == registration)
            {
                return Err(AppError::Validation(format!(
                    "Registration {} already exists in this sector",
                    registration
                )));
            }
        }

        let Some(employee) = session.employees.iter_mut().find(|e| e.id == id) else {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        };

        if let Some(registration) = &request.registration {
            employee.registration = registration.clone();
        }
        if let Some(name) = &request.name {
            employee.name = name.clone();
        }
        if let Some(group) = request.group {
            employee.group = group;
        }
        if let Some(role) = request.role {
            employee.role = role;
        }
        if let Some(status) = request.status {
            // statusDate reflects only actual status changes.
            if employee.status != status {
                employee.status_date = Utc::now().to_rfc3339();
            }
            employee.status = status;
        }
        if let Some(contact) = &request.contact {
            employee.contact = Some(contact.clone());
        }
        let updated = employee.clone();

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Update,
            format!("Editou dados de: {}", updated.name),
            &sector,
        );
        session.global.push_audit(entry);

        self.commit(&session).await?;
        Ok(updated)
    }

    pub async fn delete_employee(&self, actor: &Actor, id: &str) -> Result<(), AppError> {
        let mut session = self.inner.session.write().await;

        let Some(position) = session.employees.iter().position(|e| e.id == id) else {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        };
        let removed = session.employees.remove(position);

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Delete,
            format!(
                "Excluiu funcionário: {} ({})",
                removed.name, removed.registration
            ),
            &sector,
        );
        session.global.push_audit(entry);

        self.commit(&session).await?;
        Ok(())
    }

    /// Replace the whole roster of the active sector. Rows without a
    /// registration or name are skipped, matching the spreadsheet
    /// import behavior.
    pub async fn import_employees(
        &self,
        actor: &Actor,
        rows: &[CreateEmployeeRequest],
    ) -> Result<Vec<Employee>, AppError> {
        let now = Utc::now().to_rfc3339();
        let employees: Vec<Employee> = rows
            .iter()
            .filter(|r| !r.registration.trim().is_empty() && !r.name.trim().is_empty())
            .map(|r| Employee {
                id: uuid::Uuid::new_v4().to_string(),
                group: if GROUPS.contains(&r.group) { r.group } else { 1 },
                registration: r.registration.clone(),
                name: r.name.clone(),
                role: r.role,
                status: r.status,
                status_date: now.clone(),
                contact: r.contact.clone(),
                created_at: now.clone(),
            })
            .collect();

        if employees.is_empty() {
            return Err(AppError::Validation(
                "No valid employee rows to import".to_string(),
            ));
        }

        let mut session = self.inner.session.write().await;
        session.employees = employees.clone();

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Create,
            format!(
                "Importou {} funcionários via planilha para {}",
                employees.len(),
                sector
            ),
            &sector,
        );
        session.global.push_audit(entry);

        self.commit(&session).await?;
        Ok(employees)
    }

    // ==================== EVENT OPERATIONS ====================

    pub async fn list_events(&self) -> Vec<CalendarEvent> {
        self.inner.session.read().await.events.clone()
    }

    /// Append a calendar event. Events are never edited in place; an
    /// employee reference is accepted even if it dangles.
    pub async fn create_event(
        &self,
        actor: &Actor,
        request: &CreateEventRequest,
    ) -> Result<CalendarEvent, AppError> {
        let event = CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id: request.employee_id.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
            event_type: request.event_type,
            title: request.title.clone(),
            description: request.description.clone(),
        };

        let mut session = self.inner.session.write().await;
        session.events.push(event.clone());

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Create,
            format!("Agendou evento: {}", event.title),
            &sector,
        );
        session.global.push_audit(entry);

        self.commit(&session).await?;
        Ok(event)
    }

    // ==================== USER OPERATIONS ====================

    pub async fn list_users(&self) -> Vec<User> {
        self.inner.session.read().await.global.users.clone()
    }

    pub async fn create_user(
        &self,
        actor: &Actor,
        request: &CreateUserRequest,
    ) -> Result<User, AppError> {
        let mut session = self.inner.session.write().await;
        if session
            .global
            .users
            .iter()
            .any(|u| u.username == request.username)
        {
            return Err(AppError::Validation(format!(
                "Username {} is already taken",
                request.username
            )));
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: request.username.clone(),
            password: Some(request.password.clone()),
            role: request.role,
            sectors: request.sectors.clone(),
        };
        session.global.users.push(user.clone());

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Create,
            format!("Criou acesso: {}", user.username),
            &sector,
        );
        session.global.push_audit(entry);
        session.refresh_registry();

        self.commit(&session).await?;
        Ok(user)
    }

    pub async fn update_user(
        &self,
        actor: &Actor,
        id: &str,
        request: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        let mut session = self.inner.session.write().await;

        if let Some(username) = &request.username {
            if session
                .global
                .users
                .iter()
                .any(|u| u.id != id && &u.username == username)
            {
                return Err(AppError::Validation(format!(
                    "Username {} is already taken",
                    username
                )));
            }
        }

        let Some(user) = session.global.users.iter_mut().find(|u| u.id == id) else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };

        if let Some(username) = &request.username {
            user.username = username.clone();
        }
        if let Some(password) = &request.password {
            user.password = Some(password.clone());
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(sectors) = &request.sectors {
            user.sectors = sectors.clone();
        }
        let updated = user.clone();

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Update,
            format!("Editou acesso: {}", updated.username),
            &sector,
        );
        session.global.push_audit(entry);
        session.refresh_registry();

        self.commit(&session).await?;
        Ok(updated)
    }

    pub async fn delete_user(&self, actor: &Actor, id: &str) -> Result<(), AppError> {
        let mut session = self.inner.session.write().await;

        let Some(position) = session.global.users.iter().position(|u| u.id == id) else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };
        let removed = session.global.users.remove(position);

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            actor,
            AuditAction::Delete,
            format!("Removeu acesso: {}", removed.username),
            &sector,
        );
        session.global.push_audit(entry);
        session.refresh_registry();

        self.commit(&session).await?;
        Ok(())
    }

    // ==================== AUDIT / DEVICES ====================

    pub async fn audit_log(&self) -> Vec<AuditEntry> {
        self.inner.session.read().await.global.audit_log.clone()
    }

    pub async fn devices(&self) -> Vec<DeviceInfo> {
        self.inner.session.read().await.global.synced_devices.clone()
    }

    /// Record a successful login: audit entry plus device registration.
    pub async fn record_login(
        &self,
        user: &User,
        device_name: &str,
        device_ip: &str,
    ) -> Result<(), AppError> {
        let mut session = self.inner.session.write().await;

        let sector = session.global.sector_name.clone();
        let entry = audit_entry(
            &Actor {
                id: user.id.clone(),
                username: user.username.clone(),
            },
            AuditAction::Login,
            format!("Acesso autorizado: {}", user.username),
            &sector,
        );
        session.global.push_audit(entry);

        session.global.register_device(DeviceInfo {
            id: uuid::Uuid::new_v4().to_string(),
            name: device_name.to_string(),
            ip: device_ip.to_string(),
            location: "Unidade Operacional Central".to_string(),
            last_seen: Utc::now().to_rfc3339(),
            is_online: true,
        });

        self.commit(&session).await?;
        Ok(())
    }

    /// Find a registered user by username.
    pub async fn find_user(&self, username: &str) -> Option<User> {
        self.inner
            .session
            .read()
            .await
            .global
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

fn audit_entry(actor: &Actor, action: AuditAction, details: String, sector: &str) -> AuditEntry {
    AuditEntry {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: actor.id.clone(),
        username: actor.username.clone(),
        action,
        details,
        sector: sector.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }
}

/// Convenience for master logins that are not backed by a stored user.
pub fn master_user(username: &str) -> User {
    User {
        id: "master".to_string(),
        username: username.to_string(),
        password: None,
        role: UserRole::Master,
        sectors: Vec::new(),
    }
}
