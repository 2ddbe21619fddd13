//! Native logon capability

use crate::core::types::{Credential, LogonKind};
use crate::windows::utils::NativeError;

/// Which half of the profile round trip failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFailure {
    Load(NativeError),
    Unload(NativeError),
}

/// The OS facility that authenticates a credential and opens a session
pub trait LogonPrimitive {
    /// Logon session owned by the caller, released on drop
    type Session;

    /// Authenticate `credential` against `domain` (`"."` is the local machine,
    /// `None` when the username is a UPN)
    fn logon(
        &self,
        credential: &Credential,
        domain: Option<&str>,
        kind: LogonKind,
    ) -> Result<Self::Session, NativeError>;

    /// Load the profile of the user behind `session`, then unload it again
    fn load_profile(&self, session: &Self::Session, username: &str) -> Result<(), ProfileFailure>;
}

impl<T: LogonPrimitive + ?Sized> LogonPrimitive for &T {
    type Session = T::Session;

    fn logon(
        &self,
        credential: &Credential,
        domain: Option<&str>,
        kind: LogonKind,
    ) -> Result<Self::Session, NativeError> {
        (**self).logon(credential, domain, kind)
    }

    fn load_profile(&self, session: &Self::Session, username: &str) -> Result<(), ProfileFailure> {
        (**self).load_profile(session, username)
    }
}

#[cfg(windows)]
pub use native::{LogonSession, NativeLogon};

#[cfg(windows)]
mod native {
    use super::{LogonPrimitive, ProfileFailure};
    use crate::core::types::{Credential, LogonKind};
    use crate::windows::bindings::{advapi32, userenv};
    use crate::windows::types::Handle;
    use crate::windows::utils::{string_to_wide, NativeError};
    use winapi::um::winnt::HANDLE;

    /// Token of a successful logon, closed on drop
    #[derive(Debug)]
    pub struct LogonSession {
        token: Handle,
    }

    impl LogonSession {
        pub fn raw(&self) -> HANDLE {
            self.token.raw()
        }

        /// Take ownership of the token; the caller must close it
        pub fn into_raw(self) -> HANDLE {
            self.token.into_raw()
        }
    }

    /// `LogonUserW` with the default provider
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NativeLogon;

    impl LogonPrimitive for NativeLogon {
        type Session = LogonSession;

        fn logon(
            &self,
            credential: &Credential,
            domain: Option<&str>,
            kind: LogonKind,
        ) -> Result<LogonSession, NativeError> {
            let username = string_to_wide(credential.username().unwrap_or(""));
            let domain = domain.map(string_to_wide);
            let mut password = string_to_wide(credential.password());

            let result =
                advapi32::logon_user(&username, domain.as_deref(), &password, kind.as_raw());

            // SAFETY: writes stay inside the buffer we own
            unsafe {
                for unit in password.iter_mut() {
                    std::ptr::write_volatile(unit, 0);
                }
            }

            result.map(|token| LogonSession { token })
        }

        fn load_profile(
            &self,
            session: &LogonSession,
            username: &str,
        ) -> Result<(), ProfileFailure> {
            let name = string_to_wide(username);
            let profile =
                userenv::load_user_profile(&session.token, &name).map_err(ProfileFailure::Load)?;
            profile.unload().map_err(ProfileFailure::Unload)
        }
    }
}
