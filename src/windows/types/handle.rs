//! Owned kernel object handle

use crate::windows::bindings::kernel32;
use std::ptr;
use winapi::um::winnt::HANDLE;

/// Token (or other kernel object) handle that is closed when it goes out of scope.
///
/// Every handle the token and logon paths acquire is wrapped here as soon as
/// the acquiring call succeeds, so early returns cannot leak it.
#[derive(Debug)]
pub struct Handle(HANDLE);

impl Handle {
    /// Wrap a handle the caller owns
    pub fn new(raw: HANDLE) -> Self {
        Handle(raw)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn raw(&self) -> HANDLE {
        self.0
    }

    /// Release ownership; the caller must close the handle
    pub fn into_raw(mut self) -> HANDLE {
        std::mem::replace(&mut self.0, ptr::null_mut())
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        // A failed close leaves nothing to recover
        let _ = unsafe { kernel32::close_handle(self.0) };
    }
}

// Kernel handles are process-wide, not thread-bound
unsafe impl Send for Handle {}
unsafe impl Sync for Handle {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::bindings::advapi32::open_process_token;
    use winapi::um::winnt::TOKEN_QUERY;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_token_closed_on_drop() {
        for _ in 0..64 {
            let token = open_process_token(TOKEN_QUERY).unwrap();
            assert!(!token.is_null());
            drop(token);
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_into_raw_hands_over_ownership() {
        let token = open_process_token(TOKEN_QUERY).unwrap();
        let raw = token.into_raw();
        assert!(!raw.is_null());

        // the wrapper did not close it, so closing here succeeds exactly once
        assert!(unsafe { kernel32::close_handle(raw) }.is_ok());
    }
}
