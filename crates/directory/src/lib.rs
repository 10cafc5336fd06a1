//! Keyed contact directory
//!
//! This crate provides the store that owns contacts:
//! - ContactDirectory: add / get / update / delete / list over `id -> Contact`
//! - IdGenerator: collision-skipping decimal identifier generation
//! - DirectoryConfig: `contactbook.toml` settings (ID counter start, field limits)
//! - ContactDirectory::global(): lazily created process-wide instance

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod directory;
pub mod id_gen;
mod registry;

pub use config::{DirectoryConfig, CONFIG_FILE_NAME};
pub use directory::ContactDirectory;
pub use id_gen::IdGenerator;
