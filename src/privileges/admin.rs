//! Administrator detection across OS generations

use super::elevation::ElevationCheck;
use super::gate::{VersionGate, VersionProvider};
use super::membership::MembershipCheck;
use crate::core::types::{PrivilegeStrategy, UserResult};
use tracing::debug;

/// Decides whether the process holds administrative rights.
///
/// The OS version is read on every call and picks exactly one checker:
/// group membership before UAC, token elevation from Vista/2008 on. The other
/// checker is never consulted, and checker errors are returned unchanged.
pub struct AdminOracle<V, M, E> {
    version: V,
    membership: M,
    elevation: E,
}

impl<V, M, E> AdminOracle<V, M, E>
where
    V: VersionProvider,
    M: MembershipCheck,
    E: ElevationCheck,
{
    pub fn new(version: V, membership: M, elevation: E) -> Self {
        AdminOracle {
            version,
            membership,
            elevation,
        }
    }

    /// Strategy `admin` would use right now; `None` if the OS version is unknown
    pub fn strategy(&self) -> Option<PrivilegeStrategy> {
        self.version.os_version().map(VersionGate::strategy_for)
    }

    pub fn admin(&self) -> UserResult<bool> {
        let Some(version) = self.version.os_version() else {
            debug!("OS version unknown, not treating process as admin");
            return Ok(false);
        };

        let strategy = VersionGate::strategy_for(version);
        debug!(%version, %strategy, "Selected admin detection strategy");

        let is_admin = match strategy {
            PrivilegeStrategy::GroupMembership => self.membership.check_token_membership()?,
            PrivilegeStrategy::TokenElevation => self.elevation.elevated_security()?,
        };

        debug!(is_admin, "Admin check complete");
        Ok(is_admin)
    }
}

#[cfg(windows)]
pub type SystemAdminOracle = AdminOracle<
    super::gate::SystemVersion,
    super::membership::TokenMembershipChecker,
    super::elevation::ElevationChecker,
>;

#[cfg(windows)]
impl SystemAdminOracle {
    /// Oracle wired to the running system
    pub fn system() -> Self {
        AdminOracle::new(
            super::gate::SystemVersion,
            super::membership::TokenMembershipChecker,
            super::elevation::ElevationChecker,
        )
    }
}

/// Whether the current process holds administrative rights
#[cfg(windows)]
pub fn is_admin() -> UserResult<bool> {
    SystemAdminOracle::system().admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{OsVersion, UserError};
    use std::cell::Cell;

    struct Fixed {
        answer: UserResult<bool>,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn new(answer: UserResult<bool>) -> Self {
            Fixed {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl MembershipCheck for Fixed {
        fn check_token_membership(&self) -> UserResult<bool> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    impl ElevationCheck for Fixed {
        fn elevated_security(&self) -> UserResult<bool> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    struct Unknown;

    impl VersionProvider for Unknown {
        fn os_version(&self) -> Option<OsVersion> {
            None
        }
    }

    #[test]
    fn test_unknown_version_is_not_admin() {
        let membership = Fixed::new(Ok(true));
        let elevation = Fixed::new(Ok(true));
        let oracle = AdminOracle::new(Unknown, &membership, &elevation);

        assert_eq!(oracle.admin(), Ok(false));
        assert_eq!(oracle.strategy(), None);
        assert_eq!(membership.calls.get(), 0);
        assert_eq!(elevation.calls.get(), 0);
    }

    #[test]
    fn test_strategy_reports_gate_decision() {
        let membership = Fixed::new(Ok(false));
        let elevation = Fixed::new(Ok(false));

        let oracle = AdminOracle::new(OsVersion::new(5, 2), &membership, &elevation);
        assert_eq!(oracle.strategy(), Some(PrivilegeStrategy::GroupMembership));

        let oracle = AdminOracle::new(OsVersion::new(6, 1), &membership, &elevation);
        assert_eq!(oracle.strategy(), Some(PrivilegeStrategy::TokenElevation));

        assert_eq!(membership.calls.get(), 0);
        assert_eq!(elevation.calls.get(), 0);
    }

    #[test]
    fn test_error_passes_through_unchanged() {
        let denied = UserError::authorization("Failed to open process token", "Access denied.");
        let membership = Fixed::new(Err(denied.clone()));
        let elevation = Fixed::new(Ok(true));
        let oracle = AdminOracle::new(OsVersion::new(5, 2), &membership, &elevation);

        assert_eq!(oracle.admin(), Err(denied));
        assert_eq!(elevation.calls.get(), 0);
    }

    #[test]
    #[cfg(windows)]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_is_admin_is_idempotent() {
        let first = is_admin().unwrap();
        let second = is_admin().unwrap();
        assert_eq!(first, second);
    }
}
