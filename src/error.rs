//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! `BookError` covers everything a single command can fail with and is always
//! recoverable; `StorageError` is reserved for persistence failures that end a
//! session.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or birthday failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// No contact is filed under the given name
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The record holds no such phone number
    #[error("Phone number not found.")]
    PhoneNotFound(String),

    /// A command was given fewer positional arguments than it needs
    #[error("Not enough arguments.")]
    InsufficientArguments { expected: usize, actual: usize },
}

impl BookError {
    /// Whether this error reports a missing contact or phone number.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored document was written by an incompatible version
    #[error("Unsupported address book version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
