//! Engine error types

use phonetype_core::RegionError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rejected formatting configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Region grammar error
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
