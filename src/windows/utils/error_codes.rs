//! Windows error code handling utilities

use crate::core::types::UserError;
use std::fmt;

/// Win32 error codes the privilege and logon paths care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    AccessDenied,
    InvalidHandle,
    InvalidParameter,
    InsufficientBuffer,
    NoSuchPrivilege,
    PrivilegeNotHeld,
    LogonFailure,
    AccountRestriction,
    PasswordExpired,
    AccountDisabled,
    LogonTypeNotGranted,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            87 => ErrorCode::InvalidParameter,
            122 => ErrorCode::InsufficientBuffer,
            1313 => ErrorCode::NoSuchPrivilege,
            1314 => ErrorCode::PrivilegeNotHeld,
            1326 => ErrorCode::LogonFailure,
            1327 => ErrorCode::AccountRestriction,
            1330 => ErrorCode::PasswordExpired,
            1331 => ErrorCode::AccountDisabled,
            1385 => ErrorCode::LogonTypeNotGranted,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl ErrorCode {
    /// Raw Win32 value
    pub fn code(self) -> u32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::AccessDenied => 5,
            ErrorCode::InvalidHandle => 6,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::InsufficientBuffer => 122,
            ErrorCode::NoSuchPrivilege => 1313,
            ErrorCode::PrivilegeNotHeld => 1314,
            ErrorCode::LogonFailure => 1326,
            ErrorCode::AccountRestriction => 1327,
            ErrorCode::PasswordExpired => 1330,
            ErrorCode::AccountDisabled => 1331,
            ErrorCode::LogonTypeNotGranted => 1385,
            ErrorCode::Unknown(code) => code,
        }
    }

    /// Get the last Windows error
    #[cfg(windows)]
    pub fn last_error() -> Self {
        unsafe { ErrorCode::from(winapi::um::errhandlingapi::GetLastError()) }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Success => write!(f, "The operation completed successfully."),
            ErrorCode::AccessDenied => write!(f, "Access denied."),
            ErrorCode::InvalidHandle => write!(f, "The handle is invalid."),
            ErrorCode::InvalidParameter => write!(f, "The parameter is incorrect."),
            ErrorCode::InsufficientBuffer => {
                write!(f, "The data area passed to a system call is too small.")
            }
            ErrorCode::NoSuchPrivilege => {
                write!(f, "A specified privilege does not exist.")
            }
            ErrorCode::PrivilegeNotHeld => {
                write!(f, "A required privilege is not held by the client.")
            }
            ErrorCode::LogonFailure => {
                write!(f, "Logon failure: unknown user name or bad password.")
            }
            ErrorCode::AccountRestriction => {
                write!(f, "Logon failure: user account restriction.")
            }
            ErrorCode::PasswordExpired => {
                write!(f, "Logon failure: the specified account password has expired.")
            }
            ErrorCode::AccountDisabled => {
                write!(f, "Logon failure: account currently disabled.")
            }
            ErrorCode::LogonTypeNotGranted => write!(
                f,
                "Logon failure: the user has not been granted the requested logon type at this computer."
            ),
            ErrorCode::Unknown(code) => match system_message(*code) {
                Some(message) => write!(f, "{}", message),
                None => write!(f, "Unknown error: {}", code),
            },
        }
    }
}

#[cfg(windows)]
fn system_message(code: u32) -> Option<String> {
    let error = ::windows::core::Error::from(::windows::core::HRESULT::from_win32(code));
    let message = error.message().to_string();
    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(not(windows))]
fn system_message(_code: u32) -> Option<String> {
    None
}

/// Failure reported by a native call, captured right after the call returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    code: u32,
    message: String,
}

impl NativeError {
    /// Create from a specific error code, using the stock message for it
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        let code = code.into();
        NativeError {
            code: code.code(),
            message: code.to_string(),
        }
    }

    /// Capture `GetLastError`
    #[cfg(windows)]
    pub fn last_error() -> Self {
        NativeError::new(ErrorCode::last_error())
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(self.code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert to an authorization failure
    pub fn into_authorization(self, context: impl Into<String>) -> UserError {
        UserError::Authorization {
            context: context.into(),
            reason: self.message,
            code: Some(self.code),
        }
    }

    /// Convert to an authentication failure
    pub fn into_authentication(self, context: impl Into<String>) -> UserError {
        UserError::Authentication {
            context: context.into(),
            reason: self.message,
            code: Some(self.code),
        }
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NativeError {}
