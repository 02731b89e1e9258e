//! Supported download platforms
//!
//! A platform tag (e.g. `ubuntu1404`) is the directory segment on the build
//! server; its archive suffix (e.g. `ubuntu14.04`) ends the archive file name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::version::error::ResolveError;

pub const UBUNTU_1404_TAG: &str = "ubuntu1404";
pub const UBUNTU_1404_SUFFIX: &str = "ubuntu14.04";

/// One row of the platform table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    /// URL path segment, also the lookup key
    pub tag: String,
    /// Suffix appended to the archive base name
    pub archive_suffix: String,
}

impl Platform {
    pub fn new(tag: impl Into<String>, archive_suffix: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            archive_suffix: archive_suffix.into(),
        }
    }
}

/// Mapping from platform tag to [`Platform`], in insertion order.
///
/// Serializes as a JSON object keyed by tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlatformTable {
    platforms: IndexMap<String, Platform>,
}

impl PlatformTable {
    /// An empty table. Every lookup fails until platforms are added.
    pub fn empty() -> Self {
        Self {
            platforms: IndexMap::new(),
        }
    }

    /// Adds a platform, replacing any previous entry with the same tag.
    pub fn insert(&mut self, platform: Platform) {
        self.platforms.insert(platform.tag.clone(), platform);
    }

    pub fn with(mut self, platform: Platform) -> Self {
        self.insert(platform);
        self
    }

    pub fn get(&self, tag: &str) -> Result<&Platform, ResolveError> {
        self.platforms
            .get(tag)
            .ok_or_else(|| ResolveError::UnsupportedPlatform(tag.to_string()))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.platforms.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Table with the platforms swift.org publishes Linux archives for.
impl Default for PlatformTable {
    fn default() -> Self {
        Self::empty().with(Platform::new(UBUNTU_1404_TAG, UBUNTU_1404_SUFFIX))
    }
}

impl FromIterator<Platform> for PlatformTable {
    fn from_iter<T: IntoIterator<Item = Platform>>(iter: T) -> Self {
        let mut table = Self::empty();
        for platform in iter {
            table.insert(platform);
        }
        table
    }
}
