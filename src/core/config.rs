//! core::config
//!
//! Simulation configuration schema.
//!
//! The embedding layer (CLI or TUI) decides where configuration lives;
//! this module only defines the schema and parses TOML text it is
//! handed. Nothing here touches the filesystem.
//!
//! # Example
//!
//! ```
//! use gitlings::core::config::SimConfig;
//!
//! let config = SimConfig::from_toml_str(r#"
//! program = "git"
//! hash_length = 7
//! "#).unwrap();
//! assert_eq!(config.program, "git");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Configuration for one simulated repository session.
///
/// All fields have defaults matching the stock tutorial behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// The program name learners type, and the name echoed in transcripts.
    pub program: String,

    /// Length of generated commit hashes, in hex characters.
    pub hash_length: usize,

    /// Author name rendered in `log` output.
    pub author_name: String,

    /// Author email rendered in `log` output.
    pub author_email: String,

    /// Whether the first `init` seeds a sample remote and working files.
    /// Exercises that need an empty working directory turn this off.
    pub seed_sample_data: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            hash_length: 7,
            author_name: "User".to_string(),
            author_email: "user@example.com".to_string(),
            seed_sample_data: true,
        }
    }
}

impl SimConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::InvalidValue` on out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.is_empty() || self.program.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "program name '{}' must be a single non-empty token",
                self.program
            )));
        }
        if !(4..=40).contains(&self.hash_length) {
            return Err(ConfigError::InvalidValue(format!(
                "hash_length {} outside supported range 4..=40",
                self.hash_length
            )));
        }
        Ok(())
    }
}
