//! Error types for the persistence and configuration layer
//!
//! The simulation itself is infallible; only file-backed state can fail.

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored JSON could not be parsed or produced
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ladder rank outside 0..5
    #[error("invalid rank {0}")]
    InvalidRank(usize),
}
