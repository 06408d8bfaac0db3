use canopy_types::TypeError;
use thiserror::Error;

/// Errors from encoding or decoding serialized objects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The `type` discriminator field is missing or not a string.
    #[error("missing type discriminator")]
    MissingType,

    /// The `type` discriminator names no known object variant.
    #[error("unknown object type: {0}")]
    UnknownType(String),

    /// The input is not valid JSON, or its structure does not match the
    /// shape the discriminated variant requires.
    #[error("malformed object: {0}")]
    Malformed(String),

    /// Canonical serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A tree entry holds a string that is not a well-formed hash.
    #[error("invalid entry hash: {0}")]
    EntryHash(#[from] TypeError),
}
