//! Error types for Lexis
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Query operations never fail on absence of data; an empty index or an
//! unknown term is represented by an empty result, not an error.

use std::io;
use thiserror::Error;

/// Result type alias for Lexis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Lexis
#[derive(Debug, Error)]
pub enum Error {
    /// A corpus source path or handle does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// An operation requiring prior state was invoked too early
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// I/O error while reading an existing corpus source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input (language code syntax, configuration values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a `NotFound` error
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }

    /// Create a `Precondition` error
    pub fn precondition(reason: impl Into<String>) -> Self {
        Error::Precondition(reason.into())
    }

    /// Create an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }

    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a `Precondition` error
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
