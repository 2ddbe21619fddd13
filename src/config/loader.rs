//! Configuration loader
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::{
    default_config, default_domain, default_log_level, default_logging, default_logon,
};
use crate::core::types::LogonKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_logon")]
    pub logon: LogonConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

/// How credentials are checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogonConfig {
    #[serde(default)]
    pub kind: LogonKind,
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl Default for LogonConfig {
    fn default() -> Self {
        default_logon()
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        default_logging()
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if the file is missing or unreadable
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_else(|err| {
            tracing::debug!(
                path = %self.config_path.display(),
                %err,
                "Using default configuration"
            );
            Config::default()
        })
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads and validates configuration from `path`, falling back to defaults
/// when the file does not exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config = match ConfigLoader::new(path).load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => Config::default(),
        Err(err) => return Err(err),
    };
    super::validate_config(&config)?;
    Ok(config)
}
