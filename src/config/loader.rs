//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Steam store endpoint returning app details keyed by app ID.
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://store.steampowered.com/api/appdetails";

/// Main configuration structure.
///
/// Built once at startup and passed explicitly to the organizer, reverser,
/// cache and lookup client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Filesystem locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Folder holding the screenshots to sort.
    #[serde(default)]
    pub source_directory: Option<PathBuf>,

    /// JSON file mapping app IDs to game names.
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_directory: None,
            cache_file: default_cache_file(),
        }
    }
}

/// Lookup service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Endpoint queried with `?appids=<id>`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with lookup requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("app_data.json")
}

fn default_endpoint() -> String {
    DEFAULT_LOOKUP_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("screenshot-sorter/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the screenshot folder, failing if none was configured.
    pub fn source_directory(&self) -> Result<&Path> {
        self.paths
            .source_directory
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("source_directory".to_string()))
    }

    /// Get the cache file path.
    pub fn cache_file(&self) -> &Path {
        &self.paths.cache_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.paths.source_directory.is_none());
        assert_eq!(config.cache_file(), Path::new("app_data.json"));
        assert_eq!(config.lookup.endpoint, DEFAULT_LOOKUP_ENDPOINT);
        assert_eq!(config.lookup.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[paths]
source_directory = "/screens"

[lookup]
timeout_seconds = 5
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.source_directory().unwrap(), Path::new("/screens"));
        assert_eq!(config.cache_file(), Path::new("app_data.json"));
        assert_eq!(config.lookup.timeout_seconds, 5);
        assert_eq!(config.lookup.endpoint, DEFAULT_LOOKUP_ENDPOINT);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_source_directory() {
        let config = Config::default();
        assert!(matches!(
            config.source_directory(),
            Err(Error::MissingConfig(_))
        ));
    }
}
