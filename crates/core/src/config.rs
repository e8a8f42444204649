//! Cell configuration via `unobserved.toml`
//!
//! Only the resolution mechanics are configurable: how long to pause before
//! clock seeding, and how long generated strings may get. The set of kinds is
//! fixed and cannot be changed here.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "unobserved.toml";

/// Default pause before seeding, in milliseconds.
pub const DEFAULT_SEED_DELAY_MS: u64 = 10;

/// Default exclusive upper bound on generated string length (1 MiB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1_048_576;

/// Resolution settings shared by every cell created with them.
///
/// # Example
///
/// ```toml
/// # Pause before seeding the generator from the clock (default: 10)
/// seed_delay_ms = 10
///
/// # Exclusive upper bound on string length (default: 1048576)
/// max_string_length = 1048576
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellConfig {
    /// Pause before clock seeding, in milliseconds.
    ///
    /// Keeps cells resolved back to back from reading the same clock value.
    #[serde(default = "default_seed_delay_ms")]
    pub seed_delay_ms: u64,
    /// Exclusive upper bound on generated string length. Must be at least 1.
    #[serde(default = "default_max_string_length")]
    pub max_string_length: usize,
}

fn default_seed_delay_ms() -> u64 {
    DEFAULT_SEED_DELAY_MS
}

fn default_max_string_length() -> usize {
    DEFAULT_MAX_STRING_LENGTH
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            seed_delay_ms: default_seed_delay_ms(),
            max_string_length: default_max_string_length(),
        }
    }
}

impl CellConfig {
    /// Seed delay as a `Duration`.
    pub fn seed_delay(&self) -> Duration {
        Duration::from_millis(self.seed_delay_ms)
    }

    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_string_length` is zero (the length range
    /// `0..max_string_length` would be empty).
    pub fn validate(&self) -> Result<()> {
        if self.max_string_length == 0 {
            return Err(Error::InvalidConfig(
                "max_string_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Unobserved value configuration
#
# Pause before seeding the generator from the clock, in milliseconds.
# Cells resolved back to back would otherwise share a clock-derived seed.
seed_delay_ms = 10

# Exclusive upper bound on generated string length (default: 1 MiB).
# Must be at least 1; a value of 1 makes every string empty.
max_string_length = 1048576
"#
    }
}
