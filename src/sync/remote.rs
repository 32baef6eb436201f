//! Remote document store contract.
//!
//! The remote side is addressed by a shared plant identifier and holds
//! one JSON document per plant. Writes replace the whole document
//! (last write wins, no server-side merge).

use async_trait::async_trait;
use serde_json::Value;

/// Transport or protocol failure talking to the remote store.
#[derive(Debug)]
pub struct RemoteError(pub String);

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RemoteError {}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError(err.to_string())
    }
}

/// A document store keyed by plant identifier.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the document for a plant id. `Ok(None)` means no document
    /// exists yet, which is not an error.
    async fn read(&self, plant_id: &str) -> Result<Option<Value>, RemoteError>;

    /// Replace the document for a plant id in full.
    async fn write(&self, plant_id: &str, document: &Value) -> Result<(), RemoteError>;
}

/// HTTP implementation against a sync endpoint
/// (`GET`/`POST {base}/api/sync/{plantId}`).
pub struct HttpRemoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn document_url(&self, plant_id: &str) -> String {
        format!("{}/api/sync/{}", self.base_url, plant_id)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn read(&self, plant_id: &str) -> Result<Option<Value>, RemoteError> {
        let response = self.client.get(self.document_url(plant_id)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        Ok(Some(response.json().await?))
    }

    async fn write(&self, plant_id: &str, document: &Value) -> Result<(), RemoteError> {
        self.client
            .post(self.document_url(plant_id))
            .json(document)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory remote store for tests: counts writes and can be
    /// switched into a failing mode.
    #[derive(Default)]
    pub struct MemoryRemoteStore {
        documents: Mutex<HashMap<String, Value>>,
        pub write_count: AtomicUsize,
        pub fail: AtomicBool,
    }

    impl MemoryRemoteStore {
        pub fn document(&self, plant_id: &str) -> Option<Value> {
            self.documents.lock().unwrap().get(plant_id).cloned()
        }
    }

    #[async_trait]
    impl RemoteStore for MemoryRemoteStore {
        async fn read(&self, plant_id: &str) -> Result<Option<Value>, RemoteError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RemoteError("remote unavailable".to_string()));
            }
            Ok(self.documents.lock().unwrap().get(plant_id).cloned())
        }

        async fn write(&self, plant_id: &str, document: &Value) -> Result<(), RemoteError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RemoteError("remote unavailable".to_string()));
            }
            self.write_count.fetch_add(1, Ordering::SeqCst);
            self.documents
                .lock()
                .unwrap()
                .insert(plant_id.to_string(), document.clone());
            Ok(())
        }
    }
}
