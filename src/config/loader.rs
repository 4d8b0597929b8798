use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound for `generation.fact_count`.
pub const MAX_FACT_COUNT: u32 = 50;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/swipefacts/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("swipefacts").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;

        if generation.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.base_url must not be empty".to_string(),
            });
        }

        if generation.model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "generation.model must not be empty".to_string(),
            });
        }

        if generation.fact_count == 0 || generation.fact_count > MAX_FACT_COUNT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "generation.fact_count must be between 1 and {}, got {}",
                    MAX_FACT_COUNT, generation.fact_count
                ),
            });
        }

        if self.ui.units_per_column <= 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.units_per_column must be positive".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be positive".to_string(),
            });
        }

        Ok(())
    }
}
