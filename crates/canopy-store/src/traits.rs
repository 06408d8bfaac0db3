use async_trait::async_trait;
use canopy_types::StoreId;

use crate::error::StoreResult;

/// Asynchronous key-value store.
///
/// All implementations must satisfy this contract:
/// - `get` distinguishes absence (`Ok(None)`) from backend failure (`Err`).
/// - `put` is idempotent for a key that already holds the same value; under
///   content addressing that is the only way a key is ever rewritten.
/// - Operations suspend rather than block, and complete off the caller's
///   current execution frame.
/// - Individual get/put calls are atomic; no multi-key transactions exist.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieve the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// The identity of this logical store, for diagnostics.
    fn id(&self) -> &StoreId;
}
