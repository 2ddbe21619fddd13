//! Advapi32.dll bindings for access tokens, SIDs and logon
//!
//! Every acquired handle is returned inside a [`Handle`], so callers release
//! it on every exit path just by letting it go out of scope.

use super::kernel32::current_process;
use crate::windows::types::Handle;
use crate::windows::utils::NativeError;
use std::mem;
use winapi::ctypes::c_void;
use winapi::shared::minwindef::{BOOL, DWORD, FALSE};
use winapi::um::processthreadsapi::OpenProcessToken;
use winapi::um::securitybaseapi::{
    CheckTokenMembership, CreateWellKnownSid, DuplicateToken, GetTokenInformation, IsValidSid,
};
use winapi::um::winbase::{LogonUserW, LOGON32_PROVIDER_DEFAULT};
use winapi::um::winnt::{
    SecurityIdentification, TokenElevation, TokenElevationType, WinBuiltinAdministratorsSid,
    HANDLE, PSID, TOKEN_ELEVATION, TOKEN_ELEVATION_TYPE, TOKEN_INFORMATION_CLASS,
};

/// Upper bound on the size of any SID
pub const MAX_SID_SIZE: usize = 68;

/// Well-known SID buffer sized for the largest possible SID
pub struct SidBuffer {
    bytes: [u8; MAX_SID_SIZE],
}

impl SidBuffer {
    fn as_psid(&mut self) -> PSID {
        self.bytes.as_mut_ptr() as PSID
    }
}

/// Open the current process's primary token
pub fn open_process_token(desired_access: DWORD) -> Result<Handle, NativeError> {
    let mut token: HANDLE = std::ptr::null_mut();
    unsafe {
        if OpenProcessToken(current_process(), desired_access, &mut token) == FALSE {
            return Err(NativeError::last_error());
        }
    }
    Ok(Handle::new(token))
}

/// Duplicate a primary token as an identification-level impersonation token
pub fn duplicate_for_identification(token: &Handle) -> Result<Handle, NativeError> {
    let mut duplicate: HANDLE = std::ptr::null_mut();
    unsafe {
        if DuplicateToken(token.raw(), SecurityIdentification, &mut duplicate) == FALSE {
            return Err(NativeError::last_error());
        }
    }
    Ok(Handle::new(duplicate))
}

/// Build the BUILTIN\Administrators SID
pub fn administrators_sid() -> Result<SidBuffer, NativeError> {
    let mut sid = SidBuffer {
        bytes: [0u8; MAX_SID_SIZE],
    };
    let mut size = MAX_SID_SIZE as DWORD;

    unsafe {
        if CreateWellKnownSid(
            WinBuiltinAdministratorsSid,
            std::ptr::null_mut(),
            sid.as_psid(),
            &mut size,
        ) == FALSE
        {
            return Err(NativeError::last_error());
        }

        if IsValidSid(sid.as_psid()) == FALSE {
            return Err(NativeError::last_error());
        }
    }

    Ok(sid)
}

/// Whether `sid` is enabled in the impersonation token `token`
pub fn check_token_membership(token: &Handle, sid: &mut SidBuffer) -> Result<bool, NativeError> {
    let mut is_member: BOOL = FALSE;
    unsafe {
        if CheckTokenMembership(token.raw(), sid.as_psid(), &mut is_member) == FALSE {
            return Err(NativeError::last_error());
        }
    }
    Ok(is_member != FALSE)
}

/// Query a fixed-size token information class into `T`
///
/// # Safety
/// `T` must be the structure Windows returns for `class`
unsafe fn query_token_information<T: Default>(
    token: &Handle,
    class: TOKEN_INFORMATION_CLASS,
) -> Result<T, NativeError> {
    let mut info = T::default();
    let mut return_length: DWORD = 0;

    if GetTokenInformation(
        token.raw(),
        class,
        &mut info as *mut T as *mut c_void,
        mem::size_of::<T>() as DWORD,
        &mut return_length,
    ) == FALSE
    {
        return Err(NativeError::last_error());
    }

    Ok(info)
}

/// `TokenIsElevated` of the token
pub fn token_is_elevated(token: &Handle) -> Result<bool, NativeError> {
    // TOKEN_ELEVATION is a single DWORD
    const _: () = assert!(mem::size_of::<TOKEN_ELEVATION>() == mem::size_of::<DWORD>());
    let is_elevated: DWORD = unsafe { query_token_information(token, TokenElevation)? };
    Ok(is_elevated != 0)
}

/// Raw `TOKEN_ELEVATION_TYPE` of the token
pub fn token_elevation_type(token: &Handle) -> Result<TOKEN_ELEVATION_TYPE, NativeError> {
    unsafe { query_token_information::<TOKEN_ELEVATION_TYPE>(token, TokenElevationType) }
}

/// Safe wrapper for LogonUserW
///
/// All string arguments must be null-terminated UTF-16. `domain` is `None`
/// for a UPN username.
pub fn logon_user(
    username: &[u16],
    domain: Option<&[u16]>,
    password: &[u16],
    logon_type: DWORD,
) -> Result<Handle, NativeError> {
    debug_assert!(username.last() == Some(&0));
    debug_assert!(domain.map_or(true, |d| d.last() == Some(&0)));
    debug_assert!(password.last() == Some(&0));

    let mut token: HANDLE = std::ptr::null_mut();
    unsafe {
        if LogonUserW(
            username.as_ptr(),
            domain.map_or(std::ptr::null(), |d| d.as_ptr()),
            password.as_ptr(),
            logon_type,
            LOGON32_PROVIDER_DEFAULT,
            &mut token,
        ) == FALSE
        {
            return Err(NativeError::last_error());
        }
    }
    Ok(Handle::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use winapi::um::winnt::{TokenElevationTypeDefault, TokenElevationTypeLimited, TOKEN_QUERY};

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_process_token() {
        let token = open_process_token(TOKEN_QUERY).unwrap();
        assert!(!token.is_null());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_administrators_sid() {
        assert!(administrators_sid().is_ok());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_token_elevation_type_in_range() {
        let token = open_process_token(TOKEN_QUERY).unwrap();
        let kind = token_elevation_type(&token).unwrap();
        assert!((TokenElevationTypeDefault..=TokenElevationTypeLimited).contains(&kind));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_logon_unknown_user_fails() {
        let user = crate::windows::utils::string_to_wide("no-such-user-6f1c");
        let domain = crate::windows::utils::string_to_wide(".");
        let password = crate::windows::utils::string_to_wide("goldilocks");
        assert!(logon_user(&user, Some(&domain), &password, 2).is_err());

        let upn = crate::windows::utils::string_to_wide("no-such-user-6f1c@localhost");
        assert!(logon_user(&upn, None, &password, 2).is_err());
    }
}
