//! Credential types for local logon
//!
//! SECURITY: the password never appears in `Debug` output and is zeroed on drop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username/password pair, either half of which may be absent
pub struct Credential {
    username: Option<String>,
    password: Option<String>,
}

impl Credential {
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        Credential {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    /// Username, or `None` when absent or empty
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Username for display in error messages; empty when absent
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Password as handed to the logon facility. An absent password is the empty string.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

impl Drop for Credential {
    fn drop(&mut self) {
        if let Some(password) = self.password.as_mut() {
            // SAFETY: zero bytes are valid UTF-8
            unsafe {
                for byte in password.as_bytes_mut() {
                    std::ptr::write_volatile(byte, 0);
                }
            }
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Win32 logon type passed to `LogonUserW`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogonKind {
    #[default]
    Interactive,
    Network,
    Batch,
    Service,
    NetworkCleartext,
}

impl LogonKind {
    /// `LOGON32_LOGON_*` value
    pub fn as_raw(self) -> u32 {
        match self {
            LogonKind::Interactive => 2,
            LogonKind::Network => 3,
            LogonKind::Batch => 4,
            LogonKind::Service => 5,
            LogonKind::NetworkCleartext => 8,
        }
    }
}
