//! Core type definitions
//!
//! OS version snapshots, privilege strategies, credentials and the error type.

mod credential;
mod error;
mod version;

pub use credential::{Credential, LogonKind};
pub use error::{UserError, UserResult};
pub use version::{OsVersion, ParseVersionError, PrivilegeStrategy};
