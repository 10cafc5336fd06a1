//! Error types for the contact book
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Messages keep the wording callers already match on, e.g.
//! `"First Name cannot be null!"` or `"Contact ID: 7 does not exist"`.

use crate::field::Field;
use std::io;
use thiserror::Error;

/// Result type alias for contact book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contact book
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was absent at construction
    #[error("{field} cannot be null!")]
    RequiredField {
        /// The missing field
        field: Field,
    },

    /// A field exceeded its maximum length
    #[error("{field} cannot be longer than {limit}!")]
    FieldTooLong {
        /// The offending field
        field: Field,
        /// Maximum allowed length in characters
        limit: usize,
        /// Actual length in characters
        actual: usize,
    },

    /// Caller-supplied identifier is already present in the directory
    #[error("Contact ID: {id} already exists!")]
    DuplicateKey {
        /// The rejected identifier
        id: String,
    },

    /// Identifier is not present in the directory
    #[error("Contact ID: {id} does not exist")]
    NotFound {
        /// The unknown identifier
        id: String,
    },

    /// Every generated identifier short enough to store is already taken
    #[error("No free Contact ID within {limit} characters")]
    IdsExhausted {
        /// Maximum identifier length in characters
        limit: usize,
    },

    /// Configuration could not be read, parsed, or validated
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: String,
    },

    /// I/O error while writing to a display sink or config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a `NotFound` error for `id`
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Build a `DuplicateKey` error for `id`
    pub fn duplicate_key(id: impl Into<String>) -> Self {
        Error::DuplicateKey { id: id.into() }
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for errors raised by the record validation pass
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::RequiredField { .. } | Error::FieldTooLong { .. })
    }

    /// True if the error reports an unknown identifier
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// The field a validation error refers to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Error::RequiredField { field } | Error::FieldTooLong { field, .. } => Some(*field),
            _ => None,
        }
    }
}
