//! Ranking configuration file.
//!
//! An optional TOML file supplies default filters and balance; command-line
//! flags override individual values on top of it.
//!
//! ```toml
//! [filters]
//! dist = 20
//! abv = "medium"
//! nearby = 5
//!
//! [balance]
//! quality = 70
//! quantity = 30
//! ```

use std::path::Path;

use brew_map_rank_models::{Balance, InvalidFilterError, RankFilters};
use serde::Deserialize;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path to the config file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parse but cannot be used.
    #[error(transparent)]
    Invalid(#[from] InvalidFilterError),
}

/// Filters and balance for a ranking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    pub filters: RankFilters,
    pub balance: Balance,
}

impl RankConfig {
    /// Parses and validates a TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, has unknown fields, or
    /// holds invalid values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!("Loaded ranking config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Validates both the filters and the balance.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), InvalidFilterError> {
        self.filters.validate()?;
        self.balance.validate()
    }
}
