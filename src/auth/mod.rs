//! Local user authentication
//!
//! [`Authenticator`] turns native logon results into the crate's error
//! contract. The native facility sits behind [`LogonPrimitive`].

pub mod authenticator;
pub mod primitive;

pub use authenticator::{Authenticator, LogonOptions};
pub use primitive::{LogonPrimitive, ProfileFailure};

#[cfg(windows)]
pub use primitive::{LogonSession, NativeLogon};

/// Log a local user on with the default options
#[cfg(windows)]
pub fn logon_user(
    username: Option<&str>,
    password: Option<&str>,
) -> crate::core::types::UserResult<LogonSession> {
    Authenticator::native().logon_user(username, password)
}

/// Log a local user on and load their profile
#[cfg(windows)]
pub fn load_profile(
    username: Option<&str>,
    password: Option<&str>,
) -> crate::core::types::UserResult<()> {
    Authenticator::native().load_profile(username, password)
}

/// Whether `password` is the password of the local user `username`
#[cfg(windows)]
pub fn password_is(
    username: Option<&str>,
    password: Option<&str>,
) -> crate::core::types::UserResult<bool> {
    Authenticator::native().password_is(username, password)
}
