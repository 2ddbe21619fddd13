//! Windows API bindings
//!
//! Low-level FFI wrappers around the system libraries the token and logon
//! paths need.

pub mod advapi32;
pub mod kernel32;
pub mod ntdll;
pub mod userenv;
