use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use canopy_types::StoreId;

use crate::error::StoreResult;
use crate::traits::KvStore;

/// Shared in-process physical namespace.
///
/// One backend can host any number of logical [`MemoryStore`]s; the store ID
/// is folded into every low-level key, so their entries never collide.
/// Cloning a backend clones the handle, not the data.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    cells: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of low-level keys held across all logical stores.
    pub fn len(&self) -> usize {
        self.cells.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no logical store has written anything.
    pub fn is_empty(&self) -> bool {
        self.cells.read().expect("lock poisoned").is_empty()
    }

    fn read(&self, key: &str) -> Option<String> {
        self.cells.read().expect("lock poisoned").get(key).cloned()
    }

    fn write(&self, key: String, value: String) {
        self.cells.write().expect("lock poisoned").insert(key, value);
    }
}

/// Logical in-memory store.
///
/// The in-process analogue of a browser's single localStorage area: the
/// backend is synchronous, so each operation yields to the scheduler before
/// touching it — callers never observe completion on their own execution
/// frame.
pub struct MemoryStore {
    id: StoreId,
    backend: MemoryBackend,
}

impl MemoryStore {
    /// Create a logical store over a shared backend.
    pub fn new(id: impl Into<StoreId>, backend: MemoryBackend) -> Self {
        Self {
            id: id.into(),
            backend,
        }
    }

    /// Create a logical store with a private backend.
    pub fn isolated(id: impl Into<StoreId>) -> Self {
        Self::new(id, MemoryBackend::new())
    }

    /// Number of keys this logical store holds.
    pub fn len(&self) -> usize {
        let prefix = self.id.storage_key("");
        self.backend
            .cells
            .read()
            .expect("lock poisoned")
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .count()
    }

    /// Returns `true` if this logical store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        tokio::task::yield_now().await;
        Ok(self.backend.read(&self.id.storage_key(key)))
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        tokio::task::yield_now().await;
        self.backend
            .write(self.id.storage_key(key), value.to_string());
        Ok(())
    }

    fn id(&self) -> &StoreId {
        &self.id
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("id", &self.id)
            .field("keys", &self.len())
            .finish()
    }
}
