//! Integration tests for administrator detection

use localuser::{
    AdminOracle, ElevationCheck, MembershipCheck, OsVersion, PrivilegeStrategy, UserError,
    UserResult, VersionProvider,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;

/// Checker double that answers a fixed result and counts invocations
struct Stub {
    answer: UserResult<bool>,
    calls: Cell<usize>,
}

impl Stub {
    fn returns(answer: bool) -> Self {
        Stub {
            answer: Ok(answer),
            calls: Cell::new(0),
        }
    }

    fn raises(err: UserError) -> Self {
        Stub {
            answer: Err(err),
            calls: Cell::new(0),
        }
    }

    fn never_called(&self) -> bool {
        self.calls.get() == 0
    }

    fn answer(&self) -> UserResult<bool> {
        self.calls.set(self.calls.get() + 1);
        self.answer.clone()
    }
}

impl MembershipCheck for Stub {
    fn check_token_membership(&self) -> UserResult<bool> {
        self.answer()
    }
}

impl ElevationCheck for Stub {
    fn elevated_security(&self) -> UserResult<bool> {
        self.answer()
    }
}

/// Version double that counts how often the version is read
struct CountingVersion {
    version: OsVersion,
    reads: Cell<usize>,
}

impl VersionProvider for CountingVersion {
    fn os_version(&self) -> Option<OsVersion> {
        self.reads.set(self.reads.get() + 1);
        Some(self.version)
    }
}

fn access_denied() -> UserError {
    UserError::authorization("Failed to open process token", "Access denied.")
}

const SERVER_2003: &str = "5.2";
const SERVER_2008: &str = "6.0";

fn version(s: &str) -> OsVersion {
    s.parse().unwrap()
}

mod without_uac {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_if_token_contains_administrators_sid() {
        let membership = Stub::returns(true);
        let elevation = Stub::returns(false);
        let oracle = AdminOracle::new(version(SERVER_2003), &membership, &elevation);

        assert_eq!(oracle.admin(), Ok(true));
        assert_eq!(membership.calls.get(), 1);
        assert!(elevation.never_called());
    }

    #[test]
    fn not_admin_if_token_lacks_administrators_sid() {
        let membership = Stub::returns(false);
        let elevation = Stub::returns(true);
        let oracle = AdminOracle::new(version(SERVER_2003), &membership, &elevation);

        assert_eq!(oracle.admin(), Ok(false));
        assert!(elevation.never_called());
    }

    #[test]
    fn raises_if_membership_cannot_be_checked() {
        let membership = Stub::raises(access_denied());
        let elevation = Stub::returns(true);
        let oracle = AdminOracle::new(version(SERVER_2003), &membership, &elevation);

        let err = oracle.admin().unwrap_err();
        assert_eq!(err, access_denied());
        assert!(err.is_authorization());
        assert!(err.to_string().contains("Access denied."));
        assert!(elevation.never_called());
    }
}

mod with_uac {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_if_running_elevated() {
        let membership = Stub::returns(false);
        let elevation = Stub::returns(true);
        let oracle = AdminOracle::new(version(SERVER_2008), &membership, &elevation);

        assert_eq!(oracle.admin(), Ok(true));
        assert_eq!(elevation.calls.get(), 1);
        assert!(membership.never_called());
    }

    #[test]
    fn not_admin_if_not_running_elevated() {
        let membership = Stub::returns(true);
        let elevation = Stub::returns(false);
        let oracle = AdminOracle::new(version(SERVER_2008), &membership, &elevation);

        assert_eq!(oracle.admin(), Ok(false));
        assert!(membership.never_called());
    }

    #[test]
    fn raises_if_process_token_cannot_be_opened() {
        let membership = Stub::returns(true);
        let elevation = Stub::raises(access_denied());
        let oracle = AdminOracle::new(version(SERVER_2008), &membership, &elevation);

        let err = oracle.admin().unwrap_err();
        assert_eq!(err, access_denied());
        assert!(err.to_string().contains("Access denied."));
        assert!(membership.never_called());
    }

    #[test]
    fn windows_10_uses_token_elevation() {
        let membership = Stub::returns(true);
        let elevation = Stub::returns(false);
        let oracle = AdminOracle::new(version("10.0.19045"), &membership, &elevation);

        assert_eq!(oracle.strategy(), Some(PrivilegeStrategy::TokenElevation));
        assert_eq!(oracle.admin(), Ok(false));
        assert!(membership.never_called());
    }
}

#[test]
fn version_is_read_on_every_call() {
    let provider = CountingVersion {
        version: version(SERVER_2008),
        reads: Cell::new(0),
    };
    let membership = Stub::returns(false);
    let elevation = Stub::returns(true);
    let oracle = AdminOracle::new(&provider, &membership, &elevation);

    assert_eq!(oracle.admin(), Ok(true));
    assert_eq!(oracle.admin(), Ok(true));
    assert_eq!(provider.reads.get(), 2);
    assert_eq!(elevation.calls.get(), 2);
    assert!(membership.never_called());
}

#[test]
fn admin_is_idempotent() {
    for v in [SERVER_2003, SERVER_2008] {
        let membership = Stub::returns(true);
        let elevation = Stub::returns(true);
        let oracle = AdminOracle::new(version(v), &membership, &elevation);

        let first = oracle.admin();
        let second = oracle.admin();
        assert_eq!(first, second);
    }
}

#[cfg(windows)]
mod system {
    use localuser::{is_admin, MembershipCheck, SystemAdminOracle, TokenMembershipChecker};

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn check_token_membership_does_not_raise() {
        assert!(TokenMembershipChecker.check_token_membership().is_ok());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn system_oracle_answers_consistently() {
        let oracle = SystemAdminOracle::system();
        assert!(oracle.strategy().is_some());

        let first = oracle.admin().unwrap();
        assert_eq!(is_admin().unwrap(), first);
    }
}
