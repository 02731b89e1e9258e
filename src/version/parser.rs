//! Version string parser
//!
//! Two grammars are tried in order, first match wins:
//! - Snapshot: `swift-M.N-DEVELOPMENT-SNAPSHOT-YYYY-MM-DD[-x]`
//! - Release: `M.N[.P]`
//!
//! Anything else fails with [`ParseError::MalformedVersionString`]; there is
//! no fallback version.

use std::num::ParseIntError;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::version::error::ParseError;
use crate::version::identifier::VersionIdentifier;
use crate::version::release::ReleaseVersion;
use crate::version::snapshot::{DevelopmentSnapshot, SNAPSHOT_MARKER, SNAPSHOT_PREFIX};

/// Date and optional suffix following the snapshot marker: `2017-08-04-a`
static SNAPSHOT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})(?:-(?P<suffix>[a-z]))?$",
    )
    .unwrap()
});

/// Parse a raw version string into a release or snapshot identifier.
pub fn parse_version(input: &str) -> Result<VersionIdentifier, ParseError> {
    if let Some((branch, dated)) = split_snapshot(input) {
        debug!("Parsing '{}' as development snapshot", input);
        return parse_snapshot(input, branch, dated).map(VersionIdentifier::Snapshot);
    }

    debug!("Parsing '{}' as release version", input);
    parse_release(input).map(VersionIdentifier::Release)
}

/// Split `swift-<branch>-DEVELOPMENT-SNAPSHOT-<dated>` into its two halves.
fn split_snapshot(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix(SNAPSHOT_PREFIX)?;
    let (branch, dated) = rest.split_once(SNAPSHOT_MARKER)?;
    let branch = branch.strip_suffix('-')?;
    let dated = dated.strip_prefix('-')?;
    Some((branch, dated))
}

fn parse_snapshot(
    input: &str,
    branch: &str,
    dated: &str,
) -> Result<DevelopmentSnapshot, ParseError> {
    let components = split_components(input, branch, 2)?;
    let [major, minor] = components[..] else {
        return Err(ParseError::MalformedVersionString(input.to_string()));
    };

    let Some(caps) = SNAPSHOT_DATE_RE.captures(dated) else {
        return Err(ParseError::MalformedVersionString(input.to_string()));
    };

    let malformed = |_: ParseIntError| ParseError::MalformedVersionString(input.to_string());
    let year: i32 = caps["year"].parse().map_err(malformed)?;
    let month: u32 = caps["month"].parse().map_err(malformed)?;
    let day: u32 = caps["day"].parse().map_err(malformed)?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseError::InvalidDate {
        input: input.to_string(),
        date: format!("{}-{}-{}", &caps["year"], &caps["month"], &caps["day"]),
    })?;

    let suffix = caps
        .name("suffix")
        .and_then(|m| m.as_str().chars().next());

    DevelopmentSnapshot::new(major, minor, date, suffix)
}

fn parse_release(input: &str) -> Result<ReleaseVersion, ParseError> {
    let components = split_components(input, input, 3)?;
    match components[..] {
        [major, minor] => Ok(ReleaseVersion::new(major, minor)),
        [major, minor, patch] => Ok(ReleaseVersion::with_patch(major, minor, patch)),
        _ => Err(ParseError::MalformedVersionString(input.to_string())),
    }
}

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// Split a dotted version into at least `major.minor` and at most `max` numbers.
///
/// The leading component must be numeric for the text to count as a
/// version at all; later non-numeric components are reported by name.
fn split_components(input: &str, version: &str, max: usize) -> Result<Vec<u32>, ParseError> {
    if version.is_empty()
        || !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
    {
        return Err(ParseError::MalformedVersionString(input.to_string()));
    }

    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() > max {
        return Err(ParseError::MalformedVersionString(input.to_string()));
    }

    let mut components = Vec::with_capacity(parts.len());
    for (index, part) in parts.iter().enumerate() {
        let component = COMPONENT_NAMES[index];
        if index == 0 && !part.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParseError::MalformedVersionString(input.to_string()));
        }
        if part.is_empty() {
            return Err(ParseError::MissingRequiredComponent {
                input: input.to_string(),
                component,
            });
        }
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::NonNumericComponent {
                input: input.to_string(),
                component,
                value: part.to_string(),
            });
        }
        // Digit-only but too large for u32.
        let value = part
            .parse::<u32>()
            .map_err(|_| ParseError::NonNumericComponent {
                input: input.to_string(),
                component,
                value: part.to_string(),
            })?;
        components.push(value);
    }

    if components.len() < 2 {
        return Err(ParseError::MissingRequiredComponent {
            input: input.to_string(),
            component: "minor",
        });
    }

    Ok(components)
}
