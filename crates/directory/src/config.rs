//! Directory configuration via `contactbook.toml`
//!
//! A missing file means defaults. `write_default_if_missing` drops a commented
//! template next to the caller's data so settings can be edited by hand.

use contactbook_core::{Error, Limits, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "contactbook.toml";

/// Directory configuration loaded from `contactbook.toml`.
///
/// # Example
///
/// ```toml
/// first_generated_id = 1
///
/// [limits]
/// max_short_field = 10
/// max_address = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// First value tried by the ID generator.
    #[serde(default = "default_first_generated_id")]
    pub first_generated_id: u64,
    /// Field length limits applied to every contact in the directory.
    #[serde(default)]
    pub limits: Limits,
}

fn default_first_generated_id() -> u64 {
    1
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            first_generated_id: default_first_generated_id(),
            limits: Limits::default(),
        }
    }
}

impl DirectoryConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the ID counter starts at zero or a limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.first_generated_id == 0 {
            return Err(Error::invalid_config(
                "first_generated_id must be at least 1",
            ));
        }
        if self.limits.max_short_field == 0 || self.limits.max_address == 0 {
            return Err(Error::invalid_config(format!(
                "field limits must be non-zero (max_short_field = {}, max_address = {})",
                self.limits.max_short_field, self.limits.max_address
            )));
        }
        let digits = self.first_generated_id.to_string().chars().count();
        if digits > self.limits.max_short_field {
            return Err(Error::invalid_config(format!(
                "first_generated_id {} has {} digits, more than max_short_field = {}",
                self.first_generated_id, digits, self.limits.max_short_field
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Contact book configuration
#
# First identifier tried when the directory generates an ID (default: 1).
# Generation skips any identifier already in use.
first_generated_id = 1

# Maximum field lengths, counted in characters.
[limits]
# Contact ID, first name, last name, phone number (default: 10)
max_short_field = 10
# Address (default: 30)
max_address = 30
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig { reason } => {
                Error::invalid_config(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DirectoryConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
