//! JSON-file backed name cache.
//!
//! The whole mapping is read at the start of a run and rewritten in full
//! after every new entry. Writes go to a sibling temp file that is then
//! renamed over the cache, so an interrupted write leaves the previous
//! contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// Mapping from app ID to resolved game name, backed by a JSON object on disk.
#[derive(Debug)]
pub struct AppNameCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl AppNameCache {
    /// Load the cache from `path`.
    ///
    /// A missing or unreadable file yields an empty cache; this never fails.
    pub fn load(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring corrupt cache file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No cache file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!("Could not read cache file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        tracing::debug!("Loaded {} cached names", entries.len());

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Look up a cached name.
    pub fn get(&self, app_id: &str) -> Option<&str> {
        self.entries.get(app_id).map(String::as_str)
    }

    /// Record a name and persist the full mapping before returning.
    pub fn put(&mut self, app_id: &str, name: &str) -> Result<()> {
        self.entries.insert(app_id.to_string(), name.to_string());
        self.save()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the in-memory mapping.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Rewrite the backing file with the current mapping.
    fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries.serialize(&mut ser)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.temp_path();
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&buf)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            "Saved {} cached names to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AppNameCache::load(&dir.path().join("app_data.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_data.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(AppNameCache::load(&path).is_empty());

        fs::write(&path, r#"["440"]"#).unwrap();
        assert!(AppNameCache::load(&path).is_empty());
    }

    #[test]
    fn test_put_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_data.json");

        let mut cache = AppNameCache::load(&path);
        cache.put("440", "Team Fortress 2").unwrap();
        assert_eq!(cache.get("440"), Some("Team Fortress 2"));

        let reloaded = AppNameCache::load(&path);
        assert_eq!(reloaded.entries(), cache.entries());
        assert_eq!(reloaded.get("440"), Some("Team Fortress 2"));
    }

    #[test]
    fn test_put_writes_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_data.json");

        let mut cache = AppNameCache::load(&path);
        cache.put("620", "Portal 2").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"620\": \"Portal 2\"\n}");
        assert!(!dir.path().join("app_data.json.tmp").exists());
    }

    #[test]
    fn test_put_keeps_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_data.json");
        fs::write(&path, r#"{"70": "Half-Life"}"#).unwrap();

        let mut cache = AppNameCache::load(&path);
        assert_eq!(cache.get("70"), Some("Half-Life"));
        cache.put("440", "Team Fortress 2").unwrap();

        let reloaded = AppNameCache::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("70"), Some("Half-Life"));
    }

    #[test]
    fn test_put_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("app_data.json");

        let mut cache = AppNameCache::load(&path);
        cache.put("440", "Team Fortress 2").unwrap();
        assert!(path.exists());
    }
}
