//! Dated development snapshots cut from a release branch
//!
//! Snapshot tags look like `swift-4.0-DEVELOPMENT-SNAPSHOT-2017-08-04-a`.
//! The trailing letter disambiguates snapshots cut on the same day and
//! may be omitted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::version::error::ParseError;
use crate::version::identifier::VersionIdentifier;
use crate::version::parser::parse_version;

/// Marker between the branch version and the date in a snapshot tag.
pub const SNAPSHOT_MARKER: &str = "DEVELOPMENT-SNAPSHOT";

/// Prefix every snapshot tag starts with.
pub const SNAPSHOT_PREFIX: &str = "swift-";

/// Field order drives the derived ordering: `(major, minor, date, suffix)`.
/// `None` sorts before any letter suffix.
///
/// Fields are private so every value holds a valid suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DevelopmentSnapshot {
    major: u32,
    minor: u32,
    date: NaiveDate,
    suffix: Option<char>,
}

impl DevelopmentSnapshot {
    /// Fails with [`ParseError::InvalidSuffix`] unless `suffix` is a lowercase ASCII letter.
    pub fn new(
        major: u32,
        minor: u32,
        date: NaiveDate,
        suffix: Option<char>,
    ) -> Result<Self, ParseError> {
        if let Some(c) = suffix.filter(|c| !c.is_ascii_lowercase()) {
            return Err(ParseError::InvalidSuffix(c));
        }
        Ok(Self {
            major,
            minor,
            date,
            suffix,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }

    /// Parse a snapshot tag, rejecting plain release versions.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match parse_version(input)? {
            VersionIdentifier::Snapshot(snapshot) => Ok(snapshot),
            VersionIdentifier::Release(_) => {
                Err(ParseError::MalformedVersionString(input.to_string()))
            }
        }
    }

    /// Branch the snapshot was cut from, e.g. `swift-4.0-branch`.
    pub fn branch(&self) -> String {
        format!("{SNAPSHOT_PREFIX}{}.{}-branch", self.major, self.minor)
    }
}

/// Renders the full snapshot tag, identical to the accepted input form.
impl fmt::Display for DevelopmentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SNAPSHOT_PREFIX}{}.{}-{SNAPSHOT_MARKER}-{}",
            self.major,
            self.minor,
            self.date.format("%Y-%m-%d")
        )?;
        if let Some(suffix) = self.suffix {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}

impl FromStr for DevelopmentSnapshot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
