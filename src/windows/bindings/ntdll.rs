//! NTDLL.dll bindings for OS version discovery

use crate::core::types::OsVersion;
use std::mem;
use winapi::shared::minwindef::DWORD;
use winapi::shared::ntdef::NTSTATUS;
use winapi::um::winnt::OSVERSIONINFOW;

pub const STATUS_SUCCESS: NTSTATUS = 0x00000000;

#[link(name = "ntdll")]
extern "system" {
    fn RtlGetVersion(version_information: *mut OSVERSIONINFOW) -> NTSTATUS;
}

/// Check if NTSTATUS indicates success
pub fn nt_success(status: NTSTATUS) -> bool {
    status >= 0
}

/// Kernel version as reported by `RtlGetVersion`
///
/// Unlike `GetVersionEx`, this is not affected by compatibility manifests.
pub fn rtl_get_version() -> Option<OsVersion> {
    unsafe {
        let mut info: OSVERSIONINFOW = mem::zeroed();
        info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOW>() as DWORD;

        if !nt_success(RtlGetVersion(&mut info)) {
            return None;
        }

        let version = OsVersion::new(info.dwMajorVersion, info.dwMinorVersion);
        Some(version.with_build(info.dwBuildNumber))
    }
}
