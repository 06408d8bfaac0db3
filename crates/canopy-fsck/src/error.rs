use canopy_object::DecodeError;
use canopy_store::StoreError;
use canopy_types::{Hash, StoreId};
use thiserror::Error;

/// Errors from an integrity check.
#[derive(Debug, Error)]
pub enum FsckError {
    /// A referenced object is not present in the store.
    #[error("object {hash} missing in store {store}")]
    MissingObject { hash: Hash, store: StoreId },

    /// The stored bytes do not hash back to the key they are stored
    /// under: storage corruption or a forged label. Never auto-repaired.
    #[error("hash mismatch in store {store}: stored under {expected}, content hashes to {computed}")]
    HashMismatch {
        expected: Hash,
        computed: Hash,
        store: StoreId,
    },

    /// Backend failure from a store get.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A stored object could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result alias for integrity checks.
pub type FsckResult<T> = Result<T, FsckError>;
