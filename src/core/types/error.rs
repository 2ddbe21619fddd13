//! Error types for privilege and credential operations

use thiserror::Error;

/// Error raised by the admin-detection and authentication paths.
///
/// Both variants render as `<context>:  <reason>`, where `reason` is the
/// native diagnostic text (for example `Access denied.`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// A token query could not complete
    #[error("{context}:  {reason}")]
    Authorization {
        context: String,
        reason: String,
        code: Option<u32>,
    },

    /// A logon attempt, or the profile work that follows it, failed
    #[error("{context}:  {reason}")]
    Authentication {
        context: String,
        reason: String,
        code: Option<u32>,
    },
}

/// Result type alias for privilege and credential operations
pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Creates an authorization error without a native code
    pub fn authorization(context: impl Into<String>, reason: impl Into<String>) -> Self {
        UserError::Authorization {
            context: context.into(),
            reason: reason.into(),
            code: None,
        }
    }

    /// Creates an authentication error without a native code
    pub fn authentication(context: impl Into<String>, reason: impl Into<String>) -> Self {
        UserError::Authentication {
            context: context.into(),
            reason: reason.into(),
            code: None,
        }
    }

    /// Creates the error for a failed logon of `username`
    pub fn logon_failed(username: &str, reason: impl Into<String>, code: Option<u32>) -> Self {
        UserError::Authentication {
            context: format!("Failed to logon user {:?}", username),
            reason: reason.into(),
            code,
        }
    }

    /// Native error code, if the failure came from a Win32 call
    pub fn code(&self) -> Option<u32> {
        match self {
            UserError::Authorization { code, .. } | UserError::Authentication { code, .. } => {
                *code
            }
        }
    }

    /// Native diagnostic text
    pub fn reason(&self) -> &str {
        match self {
            UserError::Authorization { reason, .. } | UserError::Authentication { reason, .. } => {
                reason
            }
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, UserError::Authentication { .. })
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, UserError::Authorization { .. })
    }
}
