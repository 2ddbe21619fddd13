//! Token elevation check (UAC systems)

use crate::core::types::UserResult;
use std::fmt;

/// Answers whether the current process token is elevated
pub trait ElevationCheck {
    fn elevated_security(&self) -> UserResult<bool>;
}

impl<T: ElevationCheck + ?Sized> ElevationCheck for &T {
    fn elevated_security(&self) -> UserResult<bool> {
        (**self).elevated_security()
    }
}

/// Split-token classification of a process token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationKind {
    /// No linked token: UAC is off, or the account is not an administrator
    Default,
    /// The elevated half of a split token
    Full,
    /// The filtered half of a split token
    Limited,
}

impl ElevationKind {
    /// Map a raw `TOKEN_ELEVATION_TYPE`
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(ElevationKind::Default),
            2 => Some(ElevationKind::Full),
            3 => Some(ElevationKind::Limited),
            _ => None,
        }
    }
}

impl fmt::Display for ElevationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevationKind::Default => write!(f, "default"),
            ElevationKind::Full => write!(f, "full"),
            ElevationKind::Limited => write!(f, "limited"),
        }
    }
}

/// Queries the elevation state of the process token
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElevationChecker;

#[cfg(windows)]
impl ElevationChecker {
    /// Split-token classification of the process token
    pub fn elevation_kind(&self) -> UserResult<ElevationKind> {
        use crate::windows::bindings::advapi32;
        use crate::windows::utils::{ErrorCode, NativeError};
        use winapi::um::winnt::TOKEN_QUERY;

        let token = advapi32::open_process_token(TOKEN_QUERY)
            .map_err(|e| e.into_authorization("Failed to open process token"))?;

        let raw = advapi32::token_elevation_type(&token)
            .map_err(|e| e.into_authorization("Failed to get information about the token"))?;

        ElevationKind::from_raw(raw).ok_or_else(|| {
            NativeError::new(ErrorCode::InvalidParameter)
                .into_authorization(format!("Unexpected token elevation type {}", raw))
        })
    }
}

#[cfg(windows)]
impl ElevationCheck for ElevationChecker {
    fn elevated_security(&self) -> UserResult<bool> {
        use crate::windows::bindings::advapi32;
        use winapi::um::winnt::TOKEN_QUERY;

        let token = advapi32::open_process_token(TOKEN_QUERY)
            .map_err(|e| e.into_authorization("Failed to open process token"))?;

        let is_elevated = advapi32::token_is_elevated(&token)
            .map_err(|e| e.into_authorization("Failed to get information about the token"))?;

        tracing::debug!(is_elevated, "Checked process token elevation");
        Ok(is_elevated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_kind_from_raw() {
        assert_eq!(ElevationKind::from_raw(1), Some(ElevationKind::Default));
        assert_eq!(ElevationKind::from_raw(2), Some(ElevationKind::Full));
        assert_eq!(ElevationKind::from_raw(3), Some(ElevationKind::Limited));
        assert_eq!(ElevationKind::from_raw(0), None);
        assert_eq!(ElevationKind::from_raw(4), None);
    }

    #[test]
    #[cfg(windows)]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_elevated_security_does_not_fail() {
        assert!(ElevationChecker.elevated_security().is_ok());
    }

    #[test]
    #[cfg(windows)]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_full_token_is_elevated() {
        let kind = ElevationChecker.elevation_kind().unwrap();
        let elevated = ElevationChecker.elevated_security().unwrap();
        match kind {
            ElevationKind::Full => assert!(elevated),
            ElevationKind::Limited => assert!(!elevated),
            ElevationKind::Default => {}
        }
    }
}
