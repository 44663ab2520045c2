// Rust guideline compliant 2026-10-18

//! Configuration management for the rental core.

use crate::search::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_PARALLEL_THRESHOLD};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Tunables for search and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on search suggestions.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Search-as-you-type debounce delay in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Catalog size at which filtering runs in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Log level for the tracing subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            debounce_ms: default_debounce_ms(),
            parallel_threshold: default_parallel_threshold(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/config.toml`
    /// 3. Environment variables with `RENTALS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The debounce delay as a `Duration`.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `RENTALS_MAX_SUGGESTIONS`
    /// - `RENTALS_DEBOUNCE_MS`
    /// - `RENTALS_PARALLEL_THRESHOLD`
    /// - `RENTALS_LOG_LEVEL`
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("RENTALS_MAX_SUGGESTIONS") {
            self.max_suggestions = val.parse().map_err(|_| {
                Error::InvalidConfig("RENTALS_MAX_SUGGESTIONS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("RENTALS_DEBOUNCE_MS") {
            self.debounce_ms = val.parse().map_err(|_| {
                Error::InvalidConfig("RENTALS_DEBOUNCE_MS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("RENTALS_PARALLEL_THRESHOLD") {
            self.parallel_threshold = val.parse().map_err(|_| {
                Error::InvalidConfig("RENTALS_PARALLEL_THRESHOLD must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("RENTALS_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(Error::InvalidConfig(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }

        if self.debounce_ms == 0 {
            return Err(Error::InvalidConfig(
                "debounce_ms must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
