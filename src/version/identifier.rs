//! Release-or-snapshot identifier and the ordering across both kinds

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::version::error::ParseError;
use crate::version::parser::parse_version;
use crate::version::release::ReleaseVersion;
use crate::version::snapshot::DevelopmentSnapshot;

/// A parsed toolchain version, either a tagged release or a dated snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VersionIdentifier {
    Release(ReleaseVersion),
    Snapshot(DevelopmentSnapshot),
}

impl VersionIdentifier {
    pub fn major(&self) -> u32 {
        match self {
            VersionIdentifier::Release(r) => r.major,
            VersionIdentifier::Snapshot(s) => s.major(),
        }
    }

    pub fn minor(&self) -> u32 {
        match self {
            VersionIdentifier::Release(r) => r.minor,
            VersionIdentifier::Snapshot(s) => s.minor(),
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, VersionIdentifier::Snapshot(_))
    }
}

/// Same-kind values use their own ordering. Across kinds, `(major, minor)`
/// decides first; on a tie the release is greater than the snapshot.
impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (VersionIdentifier::Release(a), VersionIdentifier::Release(b)) => a.cmp(b),
            (VersionIdentifier::Snapshot(a), VersionIdentifier::Snapshot(b)) => a.cmp(b),
            (VersionIdentifier::Release(_), VersionIdentifier::Snapshot(_)) => {
                (self.major(), self.minor())
                    .cmp(&(other.major(), other.minor()))
                    .then(Ordering::Greater)
            }
            (VersionIdentifier::Snapshot(_), VersionIdentifier::Release(_)) => {
                (self.major(), self.minor())
                    .cmp(&(other.major(), other.minor()))
                    .then(Ordering::Less)
            }
        }
    }
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<ReleaseVersion> for VersionIdentifier {
    fn from(value: ReleaseVersion) -> Self {
        VersionIdentifier::Release(value)
    }
}

impl From<DevelopmentSnapshot> for VersionIdentifier {
    fn from(value: DevelopmentSnapshot) -> Self {
        VersionIdentifier::Snapshot(value)
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionIdentifier::Release(r) => fmt::Display::fmt(r, f),
            VersionIdentifier::Snapshot(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl FromStr for VersionIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Returns the greatest identifier, or `None` for an empty slice.
pub fn latest(identifiers: &[VersionIdentifier]) -> Option<VersionIdentifier> {
    identifiers.iter().max().copied()
}
