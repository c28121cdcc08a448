//! Error types for speechgate

use thiserror::Error;

/// Result type alias for speechgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in speechgate
#[derive(Debug, Error)]
pub enum Error {
    /// Trigger pattern failed to compile
    #[error("invalid trigger pattern: {0}")]
    Pattern(String),

    /// Speech recognition capability is missing on this platform
    #[error("speech recognition unsupported: {0}")]
    Unsupported(String),
}
