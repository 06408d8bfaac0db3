use std::sync::Arc;

use async_trait::async_trait;
use canopy_types::StoreId;

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// Opaque transport error surfaced by a [`RemoteClient`].
pub type ClientError = Box<dyn std::error::Error + Send + Sync>;

/// Transport capability for a network-backed store.
///
/// The transport itself (HTTP, WebDAV, anything) lives outside canopy; a
/// client is injected into [`RemoteStore`], which only adds store-ID key
/// scoping and error mapping on top. Clients operate on low-level keys.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Fetch the value at a low-level key, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Store a value at a low-level key.
    async fn put(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// Network-backed store over an injected [`RemoteClient`].
pub struct RemoteStore {
    id: StoreId,
    client: Arc<dyn RemoteClient>,
}

impl RemoteStore {
    /// Create a remote store with the given identity and transport client.
    pub fn new(id: impl Into<StoreId>, client: Arc<dyn RemoteClient>) -> Self {
        Self {
            id: id.into(),
            client,
        }
    }

    fn backend_error(&self, err: ClientError) -> StoreError {
        StoreError::Backend {
            store: self.id.clone(),
            detail: err.to_string(),
        }
    }
}

#[async_trait]
impl KvStore for RemoteStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.client
            .get(&self.id.storage_key(key))
            .await
            .map_err(|e| self.backend_error(e))
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.client
            .put(&self.id.storage_key(key), value)
            .await
            .map_err(|e| self.backend_error(e))
    }

    fn id(&self) -> &StoreId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Client stub over a plain map; fails every call when poisoned.
    #[derive(Default)]
    struct StubClient {
        cells: Mutex<HashMap<String, String>>,
        failing: bool,
    }

    #[async_trait]
    impl RemoteClient for StubClient {
        async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
            if self.failing {
                return Err("connection refused".into());
            }
            Ok(self.cells.lock().unwrap().get(key).cloned())
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), ClientError> {
            if self.failing {
                return Err("connection refused".into());
            }
            self.cells
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn keys_are_scoped_by_store_id() {
        let client = Arc::new(StubClient::default());
        let store = RemoteStore::new("r1", client.clone());
        store.put("abc", "v").await.unwrap();

        let cells = client.cells.lock().unwrap();
        assert_eq!(cells.get("canopy-r1-abc").map(String::as_str), Some("v"));
    }

    #[tokio::test]
    async fn get_roundtrip_and_absence() {
        let store = RemoteStore::new("r1", Arc::new(StubClient::default()));
        assert!(store.get("k").await.unwrap().is_none());
        store.put("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn client_errors_surface_as_backend_failures() {
        let client = Arc::new(StubClient {
            failing: true,
            ..Default::default()
        });
        let store = RemoteStore::new("r1", client);
        let err = store.get("k").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("r1"));
        assert!(msg.contains("connection refused"));
    }
}
