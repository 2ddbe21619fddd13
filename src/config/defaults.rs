//! Default configuration values

use super::loader::{Config, LoggingConfig, LogonConfig};
use crate::core::types::LogonKind;

/// Local account database
pub const DEFAULT_DOMAIN: &str = ".";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Returns the default configuration
pub fn default_config() -> Config {
    Config {
        logon: default_logon(),
        logging: default_logging(),
    }
}

pub(super) fn default_logon() -> LogonConfig {
    LogonConfig {
        kind: LogonKind::default(),
        domain: default_domain(),
    }
}

pub(super) fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
    }
}

pub(super) fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

pub(super) fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.logon.kind, LogonKind::Interactive);
        assert_eq!(config.logon.domain, ".");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_serialization() {
        let config = default_config();
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("kind = \"interactive\""));
        assert!(serialized.contains("domain = \".\""));

        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
