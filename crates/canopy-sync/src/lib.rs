//! Synchronization between content-addressed stores.
//!
//! [`sync`] transfers the object graph under a root hash from a source
//! store into a destination store, copying only objects the destination
//! lacks. The transfer leans on the transitive-closure invariant: an object
//! already present in the destination implies its entire subtree is
//! present, so a single existence check prunes the whole descent. Trees are
//! diffed name-by-name against the destination's current root to exploit
//! structural similarity, and every tree is written only after all of its
//! children — which is what re-establishes the invariant on the destination
//! side.
//!
//! Sync is additive: entries present only in the destination are never
//! deleted.

pub mod diff;
pub mod error;
pub mod transfer;

pub use diff::{diff_trees, DiffEntry};
pub use error::{SyncError, SyncResult};
pub use transfer::sync;
