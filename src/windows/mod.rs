//! Windows API layer
//!
//! Provides safe wrappers around the token, SID, logon and profile calls.
//! All unsafe FFI is contained within this module. The error code table and
//! string conversion are portable; the bindings only build on Windows.

#[cfg(windows)]
pub mod bindings;
#[cfg(windows)]
pub mod types;
pub mod utils;

#[cfg(windows)]
pub use types::Handle;
pub use utils::{ErrorCode, NativeError};
