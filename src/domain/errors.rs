//! Domain validation errors.

use std::fmt;

/// Errors raised when a value violates a domain rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The contact name is empty after trimming.
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Name is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
