use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid digest length for {algo}: expected {expected} hex chars, got {actual}")]
    InvalidDigestLength {
        algo: String,
        expected: usize,
        actual: usize,
    },
}
