//! Foundation types for canopy.
//!
//! This crate provides the two identifiers that every other canopy crate
//! speaks in:
//!
//! - [`Hash`] — Content-addressed identifier: an algorithm-tagged digest of
//!   an object's canonical serialization (`blake3_<hexdigest>`)
//! - [`StoreId`] — Name of a logical store within a shared physical
//!   key-value namespace
//!
//! Hashes are always recomputed from content, never trusted from a label
//! alone; the tag is versioned into the string so a future digest algorithm
//! cannot collide with existing keys.

pub mod error;
pub mod hash;
pub mod store_id;

pub use error::TypeError;
pub use hash::Hash;
pub use store_id::StoreId;
