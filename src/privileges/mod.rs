//! Administrative privilege detection
//!
//! [`AdminOracle`] dispatches to one of two checkers depending on the OS
//! generation reported by a [`VersionProvider`]. Each collaborator is a trait
//! so tests can substitute it.

pub mod admin;
pub mod elevation;
pub mod gate;
pub mod membership;

pub use admin::AdminOracle;
pub use elevation::{ElevationCheck, ElevationKind};
pub use gate::{VersionGate, VersionProvider};
pub use membership::MembershipCheck;

#[cfg(windows)]
pub use admin::{is_admin, SystemAdminOracle};
#[cfg(windows)]
pub use elevation::ElevationChecker;
#[cfg(windows)]
pub use gate::SystemVersion;
#[cfg(windows)]
pub use membership::TokenMembershipChecker;
