use canopy_types::StoreId;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure in the underlying storage backend.
    #[error("store {store}: backend failure: {detail}")]
    Backend { store: StoreId, detail: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
