//! Error types for the cache library.
//!
//! Cache operations themselves never fail: a lookup that finds nothing is a
//! miss, not an error. Errors only surface while building a configuration or
//! encoding a structured key.

use thiserror::Error;

/// The error type for configuration and key construction.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration object could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// A structured key could not be serialized to its canonical form.
    #[error("failed to encode structured key: {0}")]
    KeyEncoding(#[source] serde_json::Error),
}

/// A specialized Result type for cache construction.
pub type CacheResult<T> = Result<T, CacheError>;
