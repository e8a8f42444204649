//! Error types for unobserved values
//!
//! None of these errors escape the public cell operations. They describe
//! internal states (a kind with no numeric domain, an index outside the kind
//! table) that the resolver absorbs, plus configuration loading failures.
//! Each message names the input that caused it, so the `debug!` line that
//! records a swallowed error is enough to diagnose it.

use crate::kind::Kind;
use std::io;
use thiserror::Error;

/// Result type alias for unobserved operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for unobserved values
#[derive(Debug, Error)]
pub enum Error {
    /// The kind has no (minimum, maximum) domain
    #[error("Kind {0} has no numeric domain")]
    Unbounded(Kind),

    /// Index outside the kind table
    #[error("Kind index {0} is out of range (expected 0..19)")]
    KindIndexOutOfRange(usize),

    /// Configuration failed validation or parsing
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
