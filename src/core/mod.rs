//! Core module containing the fundamental types shared by the
//! admin-detection and authentication paths.

pub mod types;

pub use types::{Credential, LogonKind, OsVersion, PrivilegeStrategy, UserError, UserResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// First kernel major version that ships UAC (Vista / Server 2008)
pub const UAC_MAJOR_VERSION: u32 = 6;
