//! OS version discovery and strategy selection

use crate::core::types::{OsVersion, PrivilegeStrategy};
use crate::core::UAC_MAJOR_VERSION;

/// Source of the current OS version
pub trait VersionProvider {
    /// Current kernel version, or `None` if it cannot be determined
    fn os_version(&self) -> Option<OsVersion>;
}

impl<T: VersionProvider + ?Sized> VersionProvider for &T {
    fn os_version(&self) -> Option<OsVersion> {
        (**self).os_version()
    }
}

/// A fixed version always reports itself
impl VersionProvider for OsVersion {
    fn os_version(&self) -> Option<OsVersion> {
        Some(*self)
    }
}

/// Maps an OS generation to the way admin rights are detected on it
pub struct VersionGate;

impl VersionGate {
    pub fn strategy_for(version: OsVersion) -> PrivilegeStrategy {
        if version.major < UAC_MAJOR_VERSION {
            PrivilegeStrategy::GroupMembership
        } else {
            PrivilegeStrategy::TokenElevation
        }
    }
}

/// Version of the running kernel, read through `RtlGetVersion` on every call
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVersion;

#[cfg(windows)]
impl VersionProvider for SystemVersion {
    fn os_version(&self) -> Option<OsVersion> {
        crate::windows::bindings::ntdll::rtl_get_version()
    }
}
