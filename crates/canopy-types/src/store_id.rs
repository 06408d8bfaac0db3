use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix for all low-level keys written by canopy stores.
const KEY_PREFIX: &str = "canopy";

/// Identifier of a logical store.
///
/// Multiple logical stores can share one physical key-value namespace; the
/// store ID is folded into every low-level key so they never collide. IDs
/// should be short and contain no special characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Create a store ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The low-level key under which a value keyed by `key` is stored in
    /// the shared physical namespace.
    pub fn storage_key(&self, key: &str) -> String {
        format!("{}-{}-{}", KEY_PREFIX, self.0, key)
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StoreId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
