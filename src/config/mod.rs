//! Configuration module
//!
//! Provides configuration loading, validation, and default settings for the
//! logon options and logging.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, DEFAULT_DOMAIN, DEFAULT_LOG_LEVEL};
pub use loader::{load_config, Config, ConfigError, ConfigLoader, LoggingConfig, LogonConfig};
pub use validator::{validate_config, ConfigValidator};
