use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{StorageConfig, STORE_FORMAT_VERSION};
use crate::model::BeeHive;

use super::error::StorageError;
use super::{validate_key, Storage};

/// Envelope written to disk around a hive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredHive {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub hive: BeeHive,
}

/// File-based storage implementation.
///
/// Each key maps to one JSON document; `/` in a key maps to a subdirectory:
/// ```text
/// .honeycomb/
///   app_root.json              # key "app_root"
///   backups/
///     2024-01-01.json          # key "backups/2024-01-01"
/// ```
pub struct FileStorage {
    base_path: PathBuf,
    config: StorageConfig,
}

impl FileStorage {
    /// Creates a new FileStorage rooted at `base_path` with default config.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            config: StorageConfig::default(),
        }
    }

    /// Creates a new FileStorage rooted at the configured data directory.
    pub fn with_config(config: StorageConfig) -> Self {
        let base_path = config.data_path();
        Self { base_path, config }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the document for a key.
    ///
    /// The extension is appended to the last segment, so dots inside a
    /// key stay part of the file name.
    fn document_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        let mut path = self.base_path.clone();
        let mut segments = key.split('/').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{}.{}", segment, self.config.file_extension));
            }
        }
        Ok(path)
    }

    /// Temporary file written next to a document before the rename.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Ensures a directory exists.
    fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
        }
        Ok(())
    }

    /// Collects keys below `dir`, prefixing them with `prefix`.
    fn collect_keys(&self, dir: &Path, prefix: &str, keys: &mut Vec<String>) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir).map_err(|e| StorageError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(dir, e))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if path.is_dir() {
                let nested = format!("{}{}/", prefix, name);
                self.collect_keys(&path, &nested, keys)?;
            } else if path.extension().and_then(|e| e.to_str()) == Some(self.config.file_extension.as_str()) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(format!("{}{}", prefix, stem));
                }
            }
        }

        Ok(())
    }
}

impl Storage for FileStorage {
    fn save_hive(&self, key: &str, hive: &BeeHive) -> Result<(), StorageError> {
        let path = self.document_path(key)?;
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        let stored = StoredHive {
            version: STORE_FORMAT_VERSION,
            saved_at: Utc::now(),
            hive: hive.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        // Write next to the target, then rename over it.
        let tmp = Self::temp_path(&path);
        fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;

        info!(key, path = %path.display(), "saved hive");
        Ok(())
    }

    fn load_hive(&self, key: &str) -> Result<BeeHive, StorageError> {
        let path = self.document_path(key)?;
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        let json = fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
        let stored: StoredHive = serde_json::from_str(&json)?;
        if stored.version != STORE_FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                key: key.to_string(),
                version: stored.version,
            });
        }

        Ok(stored.hive)
    }

    fn hive_exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.document_path(key)?.exists())
    }

    fn delete_hive(&self, key: &str) -> Result<(), StorageError> {
        let path = self.document_path(key)?;
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        fs::remove_file(&path).map_err(|e| StorageError::io(&path, e))?;
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        self.collect_keys(&self.base_path, "", &mut keys)?;
        keys.sort();

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nested_key_maps_to_subdirectory() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        let path = storage.document_path("backups/first").unwrap();
        assert_eq!(path, temp.path().join("backups").join("first.json"));
    }

    #[test]
    fn test_dotted_key_keeps_its_dots() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        let path = storage.document_path("backup.v2").unwrap();
        assert_eq!(path, temp.path().join("backup.v2.json"));
        assert_eq!(FileStorage::temp_path(&path), temp.path().join("backup.v2.json.tmp"));
    }

    #[test]
    fn test_traversal_key_rejected() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert!(matches!(
            storage.document_path("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
