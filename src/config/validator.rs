//! Configuration validator
//!
//! Validates configuration values before they reach the logon facility.

use super::loader::{Config, ConfigError, LoggingConfig, LogonConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_logon(&config.logon)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    fn validate_logon(logon: &LogonConfig) -> Result<(), ConfigError> {
        if logon.domain.is_empty() {
            return Err(ConfigError::Invalid(
                "Logon domain cannot be empty; use \".\" for the local machine".to_string(),
            ));
        }

        // UPN user names go to the logon facility without a domain
        if logon.domain.contains('\\') || logon.domain.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "Logon domain must be a bare domain name: {:?}",
                logon.domain
            )));
        }

        if logon.domain.contains('\0') {
            return Err(ConfigError::Invalid(
                "Logon domain cannot contain NUL".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let level = logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {}",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Validates configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
