//! The store capability consumed by the canopy synchronizer and checker.
//!
//! A store maps string keys to string values; for canopy the key is always
//! an object's content hash and the value its canonical serialization.
//! Several logical stores can share one physical namespace, scoped by a
//! [`StoreId`] folded into every low-level key.
//!
//! # Backends
//!
//! All backends implement the async [`KvStore`] trait:
//!
//! - [`MemoryStore`] — logical store over a shared in-process
//!   [`MemoryBackend`] namespace, for tests and embedding
//! - [`RemoteStore`] — adapter over an injected [`RemoteClient`] transport
//! - [`LoggingStore`] — decorator that logs every get/put on any store
//!
//! # Design Rules
//!
//! 1. `get` returns `Ok(None)` for an absent key — absence is not an error.
//! 2. `put` must be safe to call with a key that already holds the same
//!    value (idempotent overwrite).
//! 3. Operations complete asynchronously, never on the caller's current
//!    execution frame.
//! 4. Backend failures are propagated as [`StoreError`], never swallowed.
//! 5. The store never interprets values — it is a pure key-value store.
//!
//! [`StoreId`]: canopy_types::StoreId

pub mod error;
pub mod logging;
pub mod memory;
pub mod remote;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use logging::LoggingStore;
pub use memory::{MemoryBackend, MemoryStore};
pub use remote::{ClientError, RemoteClient, RemoteStore};
pub use traits::KvStore;
