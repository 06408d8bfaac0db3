use std::sync::Arc;

use async_trait::async_trait;
use canopy_types::StoreId;
use tracing::info;

use crate::error::StoreResult;
use crate::traits::KvStore;

/// Decorator that logs every operation on the wrapped store.
pub struct LoggingStore {
    wrapped: Arc<dyn KvStore>,
}

impl LoggingStore {
    /// Wrap a store.
    pub fn new(wrapped: Arc<dyn KvStore>) -> Self {
        Self { wrapped }
    }
}

#[async_trait]
impl KvStore for LoggingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        info!(store = %self.wrapped.id(), key, "get");
        self.wrapped.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        info!(store = %self.wrapped.id(), key, bytes = value.len(), "put");
        self.wrapped.put(key, value).await
    }

    fn id(&self) -> &StoreId {
        self.wrapped.id()
    }
}
