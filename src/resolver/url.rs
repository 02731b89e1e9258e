//! Download URL construction for swift.org toolchain archives
//!
//! Releases:
//! `<base>/swift-<v>-release/<platform>/swift-<v>-RELEASE/swift-<v>-RELEASE-<suffix>.tar.gz`
//!
//! Snapshots:
//! `<base>/swift-<M.N>-branch/<platform>/<tag>/<tag>-<suffix>.tar.gz`

use serde::Serialize;
use tracing::{debug, warn};

use crate::resolver::platform::{Platform, PlatformTable};
use crate::version::error::ResolveError;
use crate::version::identifier::VersionIdentifier;

pub const DEFAULT_BASE_URL: &str = "https://swift.org/builds";

pub const ARCHIVE_EXTENSION: &str = "tar.gz";

/// Every path segment of a resolved toolchain download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedToolchain {
    /// `swift-3.1.1-release` or `swift-4.0-branch`
    pub branch: String,
    /// Platform tag used as a directory segment
    pub platform: String,
    /// `swift-3.1.1-RELEASE` or the snapshot tag
    pub directory: String,
    /// Archive file name without extension
    pub archive_base_name: String,
    /// Archive file name with extension
    pub archive_name: String,
    pub url: String,
}

/// Stateless resolver over an explicit platform table
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base_url: String,
    platforms: PlatformTable,
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, PlatformTable::default())
    }
}

impl UrlResolver {
    pub fn new(base_url: impl Into<String>, platforms: PlatformTable) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            platforms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn platforms(&self) -> &PlatformTable {
        &self.platforms
    }

    /// Resolve every segment of the download location.
    ///
    /// Fails with [`ResolveError::UnsupportedPlatform`] before any string is
    /// built if `platform` is not in the table.
    pub fn resolve(
        &self,
        version: &VersionIdentifier,
        platform: &str,
    ) -> Result<ResolvedToolchain, ResolveError> {
        let platform = self.lookup(platform)?;

        let (branch, directory) = match version {
            VersionIdentifier::Release(release) => (
                format!("swift-{release}-release"),
                format!("swift-{release}-RELEASE"),
            ),
            VersionIdentifier::Snapshot(snapshot) => (snapshot.branch(), snapshot.to_string()),
        };

        let archive_base_name = format!("{directory}-{}", platform.archive_suffix);
        let archive_name = format!("{archive_base_name}.{ARCHIVE_EXTENSION}");
        let url = format!(
            "{}/{branch}/{}/{directory}/{archive_name}",
            self.base_url, platform.tag
        );

        debug!("Resolved {} for {} to {}", version, platform.tag, url);

        Ok(ResolvedToolchain {
            branch,
            platform: platform.tag.clone(),
            directory,
            archive_base_name,
            archive_name,
            url,
        })
    }

    pub fn download_url(
        &self,
        version: &VersionIdentifier,
        platform: &str,
    ) -> Result<String, ResolveError> {
        self.resolve(version, platform).map(|resolved| resolved.url)
    }

    pub fn archive_base_name(
        &self,
        version: &VersionIdentifier,
        platform: &str,
    ) -> Result<String, ResolveError> {
        self.resolve(version, platform)
            .map(|resolved| resolved.archive_base_name)
    }

    fn lookup(&self, tag: &str) -> Result<&Platform, ResolveError> {
        self.platforms.get(tag).inspect_err(|_| {
            warn!("No platform registered for tag '{}'", tag);
        })
    }
}
