//! Field length limits and the validation primitives built on them
//!
//! The default limits are the fixed maxima of a contact record: ten characters
//! for the identifier, names and phone number, thirty for the address.
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::error::{Error, Result};
use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Default maximum for identifier, names, and phone number
pub const MAX_SHORT_FIELD: usize = 10;

/// Default maximum for the address
pub const MAX_ADDRESS: usize = 30;

/// Length limits applied by the validation pass
///
/// Violations return [`Error::FieldTooLong`] naming the field and its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum length of identifier, first name, last name, phone number (default: 10)
    #[serde(default = "default_short_field")]
    pub max_short_field: usize,

    /// Maximum length of the address (default: 30)
    #[serde(default = "default_address")]
    pub max_address: usize,
}

fn default_short_field() -> usize {
    MAX_SHORT_FIELD
}

fn default_address() -> usize {
    MAX_ADDRESS
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_short_field: MAX_SHORT_FIELD,
            max_address: MAX_ADDRESS,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_short_field: 3,
            max_address: 5,
        }
    }

    /// Validate the length of `value` against the limit for `field`
    pub fn check_length(&self, field: Field, value: &str) -> Result<()> {
        check_length(field, value, field.max_len(self))
    }
}

/// Unwrap a required value or fail with `RequiredField`
pub fn require<T>(field: Field, value: Option<T>) -> Result<T> {
    value.ok_or(Error::RequiredField { field })
}

/// Fail with `FieldTooLong` if `value` is longer than `limit` characters
pub fn check_length(field: Field, value: &str, limit: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > limit {
        return Err(Error::FieldTooLong {
            field,
            limit,
            actual,
        });
    }
    Ok(())
}
