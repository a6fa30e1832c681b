//! Core error types

use thiserror::Error;

/// Region grammar and lookup errors
#[derive(Error, Debug)]
pub enum RegionError {
    /// No grammar is registered for the region
    #[error("region '{0}' not supported")]
    UnknownRegion(String),

    /// A grammar failed validation
    #[error("invalid configuration for region '{code}': {reason}")]
    InvalidConfig {
        /// Region code of the offending grammar
        code: String,
        /// What was wrong with it
        reason: String,
    },

    /// TOML syntax or schema error
    #[error("failed to parse region config: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading an external grammar
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegionError {
    pub(crate) fn invalid(code: &str, reason: impl Into<String>) -> Self {
        RegionError::InvalidConfig {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

/// National number parsing errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The region has no numbering data
    #[error("invalid country calling code")]
    InvalidCountryCode,

    /// The input holds no usable digits
    #[error("the string supplied did not seem to be a phone number")]
    NotANumber,

    /// Fewer digits than any national number can have
    #[error("the string supplied is too short to be a phone number")]
    TooShort,

    /// More digits than any national number can have
    #[error("the string supplied is too long to be a phone number")]
    TooLong,
}

/// Result type for region operations
pub type Result<T> = std::result::Result<T, RegionError>;
