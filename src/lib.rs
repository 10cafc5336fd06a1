//! Contactbook - in-memory contact directory
//!
//! A contact book built from two pieces: a validated, immutable [`Contact`]
//! record and a [`ContactDirectory`] that stores contacts by identifier.
//!
//! # Quick Start
//!
//! ```
//! use contactbook::{ContactDirectory, ContactUpdate};
//!
//! let directory = ContactDirectory::new();
//!
//! // Generated identifier
//! let john = directory.add("John", "Doe", "1234567890", "123 Main St")?;
//! assert_eq!(john.id(), "1");
//!
//! // Partial update, other fields carried forward
//! directory.update(john.id(), ContactUpdate::new().phone_number("5550001111"))?;
//! assert_eq!(directory.first_name("1")?, "John");
//! # Ok::<(), contactbook::Error>(())
//! ```
//!
//! # Architecture
//!
//! Record types and the error taxonomy live in `contactbook-core`; the store,
//! ID generation and configuration live in `contactbook-directory`. This crate
//! re-exports both.

pub use contactbook_core::*;
pub use contactbook_directory::*;
