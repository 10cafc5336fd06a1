//! Core types for the contact book
//!
//! This crate defines the foundational types used throughout the system:
//! - Contact: Validated, immutable directory record
//! - NewContact / ContactUpdate: Fresh and replacement construction inputs
//! - Field: Names of the five contact fields
//! - Limits: Field length limits and validation primitives
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;
pub mod field;
pub mod limits;

pub use contact::{Contact, ContactUpdate, NewContact};
pub use error::{Error, Result};
pub use field::Field;
pub use limits::{check_length, require, Limits, MAX_ADDRESS, MAX_SHORT_FIELD};
