//! Administrator detection and local credential verification for Windows.
//!
//! Two independent paths:
//!
//! - [`AdminOracle`] answers whether the process holds administrative rights.
//!   Before UAC it checks membership in BUILTIN\Administrators; from
//!   Vista/2008 on it checks whether the process token is elevated.
//! - [`Authenticator`] logs local users on, loads their profiles and checks
//!   passwords. Only [`Authenticator::password_is`] turns an authentication
//!   failure into `false`.
//!
//! The decision logic is portable and every OS call sits behind a trait.
//! The native implementations are only built on Windows.

pub mod auth;
pub mod config;
pub mod core;
pub mod logging;
pub mod privileges;
pub mod windows;

pub use auth::{Authenticator, LogonOptions, LogonPrimitive, ProfileFailure};
pub use crate::core::types::{
    Credential, LogonKind, OsVersion, ParseVersionError, PrivilegeStrategy, UserError, UserResult,
};
pub use privileges::{
    AdminOracle, ElevationCheck, ElevationKind, MembershipCheck, VersionGate, VersionProvider,
};
pub use crate::windows::{ErrorCode, NativeError};

#[cfg(windows)]
pub use auth::{load_profile, logon_user, password_is, LogonSession, NativeLogon};
#[cfg(windows)]
pub use privileges::{
    is_admin, ElevationChecker, SystemAdminOracle, SystemVersion, TokenMembershipChecker,
};
