//! Local persistence for sector snapshots and the global config.
//!
//! A small key-value layer over SQLite: one key per sector plus one
//! global key. The in-memory session state is the source of truth;
//! this layer is durability, written after every mutation and re-read
//! only when the active sector changes.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::{GlobalConfig, Snapshot};

/// Key prefix for per-sector snapshot blobs.
pub const SECTOR_KEY_PREFIX: &str = "sector_data_";

/// Key holding the global config blob.
pub const GLOBAL_CONFIG_KEY: &str = "global_config";

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blobs (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Result of loading a persisted blob.
///
/// Corruption is distinguished from absence so callers can log a
/// diagnostic before degrading to the empty default.
#[derive(Debug, Clone)]
pub enum LoadOutcome<T> {
    /// The key was never written.
    Absent,
    /// A blob exists but is not valid structured data; carries the raw text.
    Corrupted(String),
    /// A well-formed value.
    Present(T),
}

/// Key-value persistence layer.
#[derive(Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the raw blob for a key.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM blobs WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Overwrite the blob for a key unconditionally (last write wins).
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO blobs (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Storage key for a sector identifier.
    pub fn sector_key(sector_id: &str) -> String {
        format!("{}{}", SECTOR_KEY_PREFIX, sector_id)
    }

    /// Load the snapshot blob for a sector.
    pub async fn load_sector(&self, sector_id: &str) -> Result<LoadOutcome<Snapshot>, AppError> {
        match self.get(&Self::sector_key(sector_id)).await? {
            None => Ok(LoadOutcome::Absent),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => Ok(LoadOutcome::Present(snapshot)),
                Err(_) => Ok(LoadOutcome::Corrupted(raw)),
            },
        }
    }

    /// Persist the snapshot blob for a sector.
    pub async fn save_sector(&self, sector_id: &str, snapshot: &Snapshot) -> Result<(), AppError> {
        let raw = serde_json::to_string(snapshot)?;
        self.set(&Self::sector_key(sector_id), &raw).await
    }

    /// Load the global config blob.
    pub async fn load_global(&self) -> Result<LoadOutcome<GlobalConfig>, AppError> {
        match self.get(GLOBAL_CONFIG_KEY).await? {
            None => Ok(LoadOutcome::Absent),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(config) => Ok(LoadOutcome::Present(config)),
                Err(_) => Ok(LoadOutcome::Corrupted(raw)),
            },
        }
    }

    /// Persist the global config blob.
    pub async fn save_global(&self, config: &GlobalConfig) -> Result<(), AppError> {
        let raw = serde_json::to_string(config)?;
        self.set(GLOBAL_CONFIG_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeRole, EmployeeStatus};
    use tempfile::TempDir;

    async fn open_store() -> (LocalStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .expect("Failed to init DB");
        (LocalStore::new(pool), temp_dir)
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            employees: vec![Employee {
                id: "e1".to_string(),
                group: 3,
                registration: "12345".to_string(),
                name: "Fulano de Tal".to_string(),
                role: EmployeeRole::Operador,
                status: EmployeeStatus::Working,
                status_date: "2026-01-01T00:00:00Z".to_string(),
                contact: None,
                created_at: "2026-01-01T00:00:00Z".to_string(),
            }],
            ..Snapshot::default()
        }
    }

    #[tokio::test]
    async fn sector_snapshot_round_trips() {
        let (store, _dir) = open_store().await;
        let snapshot = sample_snapshot();

        store.save_sector("sector1", &snapshot).await.unwrap();

        match store.load_sector("sector1").await.unwrap() {
            LoadOutcome::Present(loaded) => {
                assert_eq!(loaded.employees.len(), 1);
                assert_eq!(loaded.employees[0].registration, "12345");
                assert_eq!(loaded.config.sector_name, snapshot.config.sector_name);
            }
            other => panic!("expected Present, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn never_saved_sector_is_absent() {
        let (store, _dir) = open_store().await;
        assert!(matches!(
            store.load_sector("sector9").await.unwrap(),
            LoadOutcome::Absent
        ));
    }

    #[tokio::test]
    async fn corrupted_blob_is_tagged_not_an_error() {
        let (store, _dir) = open_store().await;
        store
            .set(&LocalStore::sector_key("sector1"), "{not json")
            .await
            .unwrap();

        match store.load_sector("sector1").await.unwrap() {
            LoadOutcome::Corrupted(raw) => assert_eq!(raw, "{not json"),
            other => panic!("expected Corrupted, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn set_overwrites_unconditionally() {
        let (store, _dir) = open_store().await;
        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }
}
