//! Local credential verification and logon

use super::primitive::{LogonPrimitive, ProfileFailure};
use crate::config::{LogonConfig, DEFAULT_DOMAIN};
use crate::core::types::{Credential, LogonKind, UserError, UserResult};
use crate::windows::utils::{ErrorCode, NativeError};
use tracing::debug;

/// Where and how credentials are checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogonOptions {
    pub kind: LogonKind,
    pub domain: String,
}

impl Default for LogonOptions {
    fn default() -> Self {
        LogonOptions {
            kind: LogonKind::Interactive,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl From<&LogonConfig> for LogonOptions {
    fn from(config: &LogonConfig) -> Self {
        LogonOptions {
            kind: config.kind,
            domain: config.domain.clone(),
        }
    }
}

/// Logs on local users, loads their profiles and checks passwords.
///
/// Holds no session state: every call authenticates from scratch and any
/// session it returns belongs to the caller.
pub struct Authenticator<L> {
    primitive: L,
    options: LogonOptions,
}

impl<L: LogonPrimitive> Authenticator<L> {
    pub fn new(primitive: L) -> Self {
        Self::with_options(primitive, LogonOptions::default())
    }

    pub fn with_options(primitive: L, options: LogonOptions) -> Self {
        Authenticator { primitive, options }
    }

    pub fn from_config(primitive: L, config: &LogonConfig) -> Self {
        Self::with_options(primitive, LogonOptions::from(config))
    }

    pub fn options(&self) -> &LogonOptions {
        &self.options
    }

    /// Log `username` on with `password`.
    ///
    /// An absent password is tried as the empty string.
    pub fn logon_user(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> UserResult<L::Session> {
        self.logon(&Credential::new(username, password))
    }

    /// Log `username` on, then load and unload their profile.
    ///
    /// The profile is created if the user has never logged on before.
    pub fn load_profile(&self, username: Option<&str>, password: Option<&str>) -> UserResult<()> {
        let credential = Credential::new(username, password);
        let session = self.logon(&credential)?;
        let name = credential.display_name();

        self.primitive
            .load_profile(&session, name)
            .map_err(|failure| match failure {
                ProfileFailure::Load(e) => {
                    e.into_authentication(format!("Failed to load user profile {:?}", name))
                }
                ProfileFailure::Unload(e) => {
                    e.into_authentication(format!("Failed to unload user profile {:?}", name))
                }
            })?;

        debug!(username = name, "Loaded user profile");
        Ok(())
    }

    /// Whether `password` is the password of `username`.
    ///
    /// Every failed logon answers `false`; only errors outside the logon
    /// itself are returned.
    pub fn password_is(&self, username: Option<&str>, password: Option<&str>) -> UserResult<bool> {
        match self.logon_user(username, password) {
            Ok(_session) => Ok(true),
            Err(err) if err.is_authentication() => {
                debug!(
                    username = username.unwrap_or(""),
                    reason = err.reason(),
                    "Password did not verify"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    fn logon(&self, credential: &Credential) -> UserResult<L::Session> {
        let name = credential.display_name();

        let Some(username) = credential.username() else {
            return Err(logon_error(name, NativeError::new(ErrorCode::LogonFailure)));
        };

        if username.contains('\0')
            || credential.password().contains('\0')
            || self.options.domain.contains('\0')
        {
            return Err(logon_error(name, NativeError::new(ErrorCode::InvalidParameter)));
        }

        // LogonUserW takes a UPN only with a NULL domain
        let domain = if username.contains('@') {
            None
        } else {
            Some(self.options.domain.as_str())
        };

        let session = self
            .primitive
            .logon(credential, domain, self.options.kind)
            .map_err(|e| logon_error(name, e))?;

        debug!(
            username,
            domain = domain.unwrap_or(""),
            kind = ?self.options.kind,
            "Logged on user"
        );
        Ok(session)
    }
}

fn logon_error(username: &str, native: NativeError) -> UserError {
    UserError::logon_failed(username, native.message(), Some(native.code()))
}

#[cfg(windows)]
impl Authenticator<super::primitive::NativeLogon> {
    /// Authenticator for the local account database
    pub fn native() -> Self {
        Authenticator::new(super::primitive::NativeLogon)
    }
}
