//! Userenv.dll bindings for user profile loading

use crate::windows::types::Handle;
use crate::windows::utils::NativeError;
use std::mem;
use std::ptr;
use winapi::shared::minwindef::{BOOL, DWORD, FALSE};
use winapi::um::userenv::UnloadUserProfile;
use winapi::um::winnt::{HANDLE, LPWSTR};

/// Suppress profile error message boxes
pub const PI_NOUI: DWORD = 1;

/// `PROFILEINFOW` from userenv.h
#[repr(C)]
#[allow(non_snake_case)]
struct PROFILEINFOW {
    dwSize: DWORD,
    dwFlags: DWORD,
    lpUserName: LPWSTR,
    lpProfilePath: LPWSTR,
    lpDefaultPath: LPWSTR,
    lpServerName: LPWSTR,
    lpPolicyPath: LPWSTR,
    hProfile: HANDLE,
}

#[link(name = "userenv")]
extern "system" {
    fn LoadUserProfileW(token: HANDLE, profile_info: *mut PROFILEINFOW) -> BOOL;
}

/// Registry hive of a loaded user profile, unloaded on drop
pub struct LoadedProfile<'a> {
    token: &'a Handle,
    profile: HANDLE,
}

impl LoadedProfile<'_> {
    /// Unload the profile, reporting failure instead of ignoring it
    pub fn unload(mut self) -> Result<(), NativeError> {
        let profile = mem::replace(&mut self.profile, ptr::null_mut());
        unsafe {
            if UnloadUserProfile(self.token.raw(), profile) == FALSE {
                return Err(NativeError::last_error());
            }
        }
        Ok(())
    }
}

impl Drop for LoadedProfile<'_> {
    fn drop(&mut self) {
        if !self.profile.is_null() {
            unsafe {
                UnloadUserProfile(self.token.raw(), self.profile);
            }
        }
    }
}

/// Load (creating if needed) the profile of the user logged on as `token`
///
/// `username` must be null-terminated UTF-16.
pub fn load_user_profile<'a>(
    token: &'a Handle,
    username: &[u16],
) -> Result<LoadedProfile<'a>, NativeError> {
    debug_assert!(username.last() == Some(&0));

    // LoadUserProfileW takes a mutable name pointer but does not write through it
    let mut name = username.to_vec();

    let mut info = PROFILEINFOW {
        dwSize: mem::size_of::<PROFILEINFOW>() as DWORD,
        dwFlags: PI_NOUI,
        lpUserName: name.as_mut_ptr(),
        lpProfilePath: ptr::null_mut(),
        lpDefaultPath: ptr::null_mut(),
        lpServerName: ptr::null_mut(),
        lpPolicyPath: ptr::null_mut(),
        hProfile: ptr::null_mut(),
    };

    unsafe {
        if LoadUserProfileW(token.raw(), &mut info) == FALSE {
            return Err(NativeError::last_error());
        }

        Ok(LoadedProfile {
            token,
            profile: info.hProfile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_info_layout() {
        // two DWORDs followed by six pointers, as in userenv.h
        let pointer = mem::size_of::<usize>();
        assert_eq!(mem::size_of::<PROFILEINFOW>(), 8 + 6 * pointer);
    }
}
