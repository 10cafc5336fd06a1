//! Contact field names
//!
//! `Field` names each of the five contact fields. Its `Display` form is the
//! human-readable label used in error messages and display dumps.

use crate::limits::Limits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fields of a [`Contact`](crate::Contact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The contact identifier
    ContactId,
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Phone number
    PhoneNumber,
    /// Postal address
    Address,
}

impl Field {
    /// All fields in validation order
    pub const ALL: [Field; 5] = [
        Field::ContactId,
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Address,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::ContactId => "Contact ID",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
            Field::Address => "Address",
        }
    }

    /// Maximum length of this field under `limits`
    pub fn max_len(&self, limits: &Limits) -> usize {
        match self {
            Field::Address => limits.max_address,
            _ => limits.max_short_field,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
