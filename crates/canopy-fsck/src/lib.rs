//! Recursive integrity checking for content-addressed stores.
//!
//! [`fsck`] walks the object graph under a root hash and verifies, for
//! every reachable object, that the stored bytes hash back to the key they
//! are stored under and that every referenced child exists. It shares the
//! object codec and store capability with the synchronizer but is
//! independent of it; running fsck after a sync confirms the destination's
//! transitive closure is intact.

pub mod check;
pub mod error;

pub use check::fsck;
pub use error::{FsckError, FsckResult};
