//! BUILTIN\Administrators membership check (pre-UAC systems)

use crate::core::types::UserResult;

/// Answers whether the current token includes the Administrators group
pub trait MembershipCheck {
    fn check_token_membership(&self) -> UserResult<bool>;
}

impl<T: MembershipCheck + ?Sized> MembershipCheck for &T {
    fn check_token_membership(&self) -> UserResult<bool> {
        (**self).check_token_membership()
    }
}

/// Checks the process token against the well-known Administrators SID
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMembershipChecker;

#[cfg(windows)]
impl MembershipCheck for TokenMembershipChecker {
    fn check_token_membership(&self) -> UserResult<bool> {
        use crate::windows::bindings::advapi32;
        use winapi::um::winnt::{TOKEN_DUPLICATE, TOKEN_QUERY};

        let token = advapi32::open_process_token(TOKEN_QUERY | TOKEN_DUPLICATE)
            .map_err(|e| e.into_authorization("Failed to open process token"))?;

        // CheckTokenMembership needs an impersonation token
        let identity = advapi32::duplicate_for_identification(&token)
            .map_err(|e| e.into_authorization("Failed to duplicate process token"))?;

        let mut sid = advapi32::administrators_sid()
            .map_err(|e| e.into_authorization("Failed to create administrators SID"))?;

        let is_member = advapi32::check_token_membership(&identity, &mut sid)
            .map_err(|e| e.into_authorization("Failed to check membership"))?;

        tracing::debug!(is_member, "Checked Administrators group membership");
        Ok(is_member)
    }
}
