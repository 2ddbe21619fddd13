//! Kernel32.dll bindings for handle management

use crate::windows::utils::NativeError;
use winapi::shared::minwindef::FALSE;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::GetCurrentProcess;
use winapi::um::winnt::HANDLE;

/// Pseudo-handle for the current process; never needs closing
pub fn current_process() -> HANDLE {
    unsafe { GetCurrentProcess() }
}

/// Safe wrapper for CloseHandle
///
/// # Safety
/// The handle must be a valid Windows handle
pub unsafe fn close_handle(handle: HANDLE) -> Result<(), NativeError> {
    if handle.is_null() {
        return Ok(());
    }

    if CloseHandle(handle) == FALSE {
        Err(NativeError::last_error())
    } else {
        Ok(())
    }
}
