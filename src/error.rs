//! Error types for sufx

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Library error type
#[derive(Error, Debug)]
pub enum Error {
    /// A character outside the nucleotide alphabet
    #[error("invalid symbol {ch:?} at position {position}")]
    InvalidSymbol { ch: char, position: usize },

    /// The terminator is appended by the tree and may not appear in token text
    #[error("reserved terminator '$' at position {position}")]
    ReservedTerminator { position: usize },

    /// Token exceeds the configured maximum length
    #[error("token of length {len} exceeds maximum of {max}")]
    TokenTooLong { len: usize, max: usize },

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
