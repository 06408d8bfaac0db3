use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Algorithm tag for hashes produced by this version of canopy.
pub const ALGO: &str = "blake3";

const DIGEST_HEX_LEN: usize = 64;

/// Content-addressed identifier for a stored object.
///
/// A `Hash` is the string `<algo>_<hexdigest>` where the digest is computed
/// over the object's canonical serialization. Identical content always
/// produces the same `Hash`, making objects deduplicatable and verifiable.
/// The algorithm tag is part of the identifier, so keys written under a
/// future digest algorithm can never collide with existing ones.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash(String);

impl Hash {
    /// Compute the hash of canonical content.
    pub fn compute(content: &str) -> Self {
        let digest = blake3::hash(content.as_bytes());
        Self(format!("{}_{}", ALGO, hex::encode(digest.as_bytes())))
    }

    /// Parse and validate a hash string of the form `<algo>_<hexdigest>`.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let (algo, digest) = s
            .split_once('_')
            .ok_or_else(|| TypeError::InvalidHashFormat(s.to_string()))?;
        if algo.is_empty() || !algo.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(TypeError::InvalidHashFormat(s.to_string()));
        }
        if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidHex(digest.to_string()));
        }
        if algo == ALGO && digest.len() != DIGEST_HEX_LEN {
            return Err(TypeError::InvalidDigestLength {
                algo: algo.to_string(),
                expected: DIGEST_HEX_LEN,
                actual: digest.len(),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// The full string form, as used for store keys.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The algorithm tag (the part before the separator).
    pub fn algo(&self) -> &str {
        self.0.split('_').next().unwrap_or("")
    }

    /// Short form for log output: tag plus the first 8 digest characters.
    pub fn short(&self) -> String {
        match self.0.split_once('_') {
            Some((algo, digest)) => {
                format!("{}_{}", algo, &digest[..digest.len().min(8)])
            }
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.short())
    }
}

impl From<Hash> for String {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}
