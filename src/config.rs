use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::resolver::platform::{Platform, PlatformTable, UBUNTU_1404_SUFFIX, UBUNTU_1404_TAG};
use crate::resolver::url::{DEFAULT_BASE_URL, UrlResolver};

const APP_NAME: &str = "swift-toolchain-resolver";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Empty platform tag in config")]
    EmptyPlatformTag,

    #[error("Duplicate platform tag in config: {0}")]
    DuplicatePlatformTag(String),
}

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Root of the build server, without trailing slash
    pub base_url: String,
    /// Platform used when none is given on the command line
    pub default_platform: String,
    pub platforms: Vec<Platform>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_platform: UBUNTU_1404_TAG.to_string(),
            platforms: vec![Platform::new(UBUNTU_1404_TAG, UBUNTU_1404_SUFFIX)],
        }
    }
}

impl ResolverConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`ResolverConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for platform in &self.platforms {
            if platform.tag.is_empty() {
                return Err(ConfigError::EmptyPlatformTag);
            }
            if !seen.insert(platform.tag.as_str()) {
                return Err(ConfigError::DuplicatePlatformTag(platform.tag.clone()));
            }
        }
        Ok(())
    }

    pub fn platform_table(&self) -> PlatformTable {
        self.platforms.iter().cloned().collect()
    }

    pub fn resolver(&self) -> UrlResolver {
        UrlResolver::new(self.base_url.clone(), self.platform_table())
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/swift-toolchain-resolver/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/swift-toolchain-resolver/config.json,
/// or ./swift-toolchain-resolver/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<ResolverConfig>(json!({
            "baseUrl": "https://mirror.example.com/builds"
        }))
        .unwrap();

        assert_eq!(result.base_url, "https://mirror.example.com/builds");
        assert_eq!(result.default_platform, "ubuntu1404");
        assert_eq!(result.platforms, ResolverConfig::default().platforms);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<ResolverConfig>(json!({
            "baseUrl": "https://mirror.example.com/builds",
            "defaultPlatform": "ubuntu1604",
            "platforms": [
                { "tag": "ubuntu1404", "archiveSuffix": "ubuntu14.04" },
                { "tag": "ubuntu1604", "archiveSuffix": "ubuntu16.04" }
            ]
        }))
        .unwrap();

        assert_eq!(
            result,
            ResolverConfig {
                base_url: "https://mirror.example.com/builds".to_string(),
                default_platform: "ubuntu1604".to_string(),
                platforms: vec![
                    Platform::new("ubuntu1404", "ubuntu14.04"),
                    Platform::new("ubuntu1604", "ubuntu16.04"),
                ],
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"platforms": [{{"tag": "ubuntu1604", "archiveSuffix": "ubuntu16.04"}}]}}"#
        )
        .unwrap();

        let config = ResolverConfig::load(file.path()).unwrap();
        let table = config.platform_table();

        assert!(table.contains("ubuntu1604"));
        assert!(!table.contains("ubuntu1404"));
    }

    #[test]
    fn load_rejects_duplicate_tags() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"platforms": [
                {{"tag": "ubuntu1404", "archiveSuffix": "ubuntu14.04"}},
                {{"tag": "ubuntu1404", "archiveSuffix": "ubuntu-14.04"}}
            ]}}"#
        )
        .unwrap();

        let err = ResolverConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePlatformTag(tag) if tag == "ubuntu1404"));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ResolverConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResolverConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_or_default_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResolverConfig::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn resolver_uses_configured_base_url() {
        let config = ResolverConfig {
            base_url: "https://mirror.example.com/builds/".to_string(),
            ..ResolverConfig::default()
        };

        assert_eq!(config.resolver().base_url(), "https://mirror.example.com/builds");
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/swift-toolchain-resolver"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.config/swift-toolchain-resolver")
        );
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./swift-toolchain-resolver"));
    }
}
