//! Tagged Swift release versions (`4.0`, `3.1.1`)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::version::error::ParseError;
use crate::version::identifier::VersionIdentifier;
use crate::version::parser::parse_version;

/// A numbered release such as `3.1` or `3.1.1`.
///
/// Field order drives the derived ordering: `(major, minor, patch)`.
/// A missing patch is stored as `0`, so `3.1` and `3.1.0` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ReleaseVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self::with_patch(major, minor, 0)
    }

    pub fn with_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a release string, rejecting development snapshot tags.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match parse_version(input)? {
            VersionIdentifier::Release(release) => Ok(release),
            VersionIdentifier::Snapshot(_) => {
                Err(ParseError::MalformedVersionString(input.to_string()))
            }
        }
    }
}

/// Renders `M.N` when patch is zero, `M.N.P` otherwise.
///
/// This is the form the swift.org build server uses in branch and tag names.
impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch > 0 {
            write!(f, ".{}", self.patch)?;
        }
        Ok(())
    }
}

impl FromStr for ReleaseVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4.0", ReleaseVersion::new(4, 0))]
    #[case("3.1", ReleaseVersion::new(3, 1))]
    #[case("3.1.1", ReleaseVersion::with_patch(3, 1, 1))]
    #[case("3.1.0", ReleaseVersion::new(3, 1))]
    fn parse_returns_expected(#[case] input: &str, #[case] expected: ReleaseVersion) {
        assert_eq!(ReleaseVersion::parse(input), Ok(expected));
    }

    #[test]
    fn parse_without_patch_defaults_to_zero() {
        let version = ReleaseVersion::parse("5.2").unwrap();
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn parse_rejects_snapshot_tag() {
        let input = "swift-4.0-DEVELOPMENT-SNAPSHOT-2017-08-04-a";
        assert_eq!(
            ReleaseVersion::parse(input),
            Err(ParseError::MalformedVersionString(input.to_string()))
        );
    }

    #[rstest]
    #[case(ReleaseVersion::new(4, 0), ReleaseVersion::new(3, 1))]
    #[case(ReleaseVersion::with_patch(3, 1, 1), ReleaseVersion::new(3, 1))]
    #[case(ReleaseVersion::new(3, 10), ReleaseVersion::with_patch(3, 9, 9))]
    #[case(ReleaseVersion::new(10, 0), ReleaseVersion::new(9, 99))]
    fn ordering_is_lexicographic(#[case] greater: ReleaseVersion, #[case] lesser: ReleaseVersion) {
        assert!(greater > lesser);
        assert!(lesser < greater);
        assert_ne!(greater, lesser);
    }

    #[test]
    fn ordering_is_transitive_and_consistent_with_equality() {
        let mut versions = vec![
            ReleaseVersion::with_patch(3, 1, 1),
            ReleaseVersion::new(4, 0),
            ReleaseVersion::new(3, 0),
            ReleaseVersion::with_patch(3, 1, 0),
            ReleaseVersion::new(3, 1),
        ];
        versions.sort();

        assert_eq!(
            versions,
            vec![
                ReleaseVersion::new(3, 0),
                ReleaseVersion::new(3, 1),
                ReleaseVersion::new(3, 1),
                ReleaseVersion::with_patch(3, 1, 1),
                ReleaseVersion::new(4, 0),
            ]
        );
        for pair in versions.windows(2) {
            assert!(pair[0] <= pair[1]);
            assert_eq!(pair[0] == pair[1], pair[0].cmp(&pair[1]).is_eq());
        }
    }

    #[rstest]
    #[case(ReleaseVersion::new(4, 0), "4.0")]
    #[case(ReleaseVersion::with_patch(3, 1, 1), "3.1.1")]
    #[case(ReleaseVersion::with_patch(5, 10, 0), "5.10")]
    fn display_returns_expected(#[case] version: ReleaseVersion, #[case] expected: &str) {
        assert_eq!(version.to_string(), expected);
    }
}
