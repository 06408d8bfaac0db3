use canopy_object::DecodeError;
use canopy_store::StoreError;
use canopy_types::{Hash, StoreId};
use thiserror::Error;

/// Errors from a sync operation.
///
/// All are terminal for the call tree they occur in; the first error
/// anywhere in a fan-out is the one surfaced.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A hash expected to exist in the source store does not. Indicates
    /// upstream store corruption; never retried.
    #[error("source object {hash} missing in source store {store}")]
    SourceMissing { hash: Hash, store: StoreId },

    /// The destination claims a current root it cannot actually fetch.
    /// Deliberately not downgraded to "treat as empty": that would mask
    /// data loss on the destination.
    #[error("destination root {hash} missing in destination store {store}")]
    DestinationCorrupt { hash: Hash, store: StoreId },

    /// Backend failure from a store get/put.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A fetched object could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
