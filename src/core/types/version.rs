//! Operating system version and privilege strategy types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Snapshot of the Windows kernel version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    #[serde(default)]
    pub build: u32,
}

impl OsVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        OsVersion {
            major,
            minor,
            build: 0,
        }
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = build;
        self
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Error returned when a version string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid OS version string: {0:?}")]
pub struct ParseVersionError(pub String);

impl FromStr for OsVersion {
    type Err = ParseVersionError;

    /// Parses `"5.2"`, `"6"` or `"10.0.19045"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let mut parts = s.trim().split('.');

        let major = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?
            .parse::<u32>()
            .map_err(|_| invalid())?;

        let mut next = || -> Result<u32, ParseVersionError> {
            match parts.next() {
                Some(p) => p.parse::<u32>().map_err(|_| invalid()),
                None => Ok(0),
            }
        };
        let minor = next()?;
        let build = next()?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(OsVersion {
            major,
            minor,
            build,
        })
    }
}

/// How administrative rights are detected for a given OS generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivilegeStrategy {
    /// Pre-UAC: membership in BUILTIN\Administrators grants the rights
    GroupMembership,
    /// UAC: only an elevated token carries the rights
    TokenElevation,
}

impl fmt::Display for PrivilegeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeStrategy::GroupMembership => write!(f, "group membership"),
            PrivilegeStrategy::TokenElevation => write!(f, "token elevation"),
        }
    }
}
