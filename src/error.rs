//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Each layer gets its own enum so adapters can pattern-match on the failure kind.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact and collection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The contact violates a domain rule (e.g. empty name)
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given ID exists
    #[error("Contact not found with ID: {0}")]
    NotFound(String),

    /// A contact with the given ID is already in the collection
    #[error("Duplicate contact ID: {0}")]
    DuplicateId(String),

    /// A structured record lacks a required key
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A structured record has a required key with a non-string value
    #[error("Field must be a string: {0}")]
    InvalidField(&'static str),
}

/// Errors that can occur while reading or writing the contacts file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file exists but does not have the expected shape
    #[error("Malformed contacts file: {0}")]
    Malformed(String),

    /// A stored record could not be turned into a contact
    #[error("Invalid contact record: {0}")]
    Record(#[from] ContactError),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or produce JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the service layer to presentation adapters.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The requested change was rejected by the collection
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// The change was applied in memory but could not be persisted
    #[error("Failed to save contacts: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
