mod error;
mod file;

pub use error::StorageError;
pub use file::{FileStorage, StoredHive};

use crate::model::BeeHive;

/// Trait for durable hive stores.
///
/// Documents are addressed by path-like keys (`app_root`,
/// `backups/2024-01-01`). Implementations must make a repeated save of
/// the same document idempotent, since the caller may retry a request.
pub trait Storage {
    /// Saves a hive under a key, replacing any previous document.
    fn save_hive(&self, key: &str, hive: &BeeHive) -> Result<(), StorageError>;

    /// Loads the hive stored under a key.
    fn load_hive(&self, key: &str) -> Result<BeeHive, StorageError>;

    /// Checks whether a document exists under a key.
    fn hive_exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Deletes the document stored under a key.
    fn delete_hive(&self, key: &str) -> Result<(), StorageError>;

    /// Lists all stored keys, sorted.
    fn list_keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Validates a path-like store key.
///
/// Segments are separated by `/`; empty, `.` and `..` segments are rejected.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.is_empty()
        || key
            .split('/')
            .any(|seg| seg.is_empty() || seg == "." || seg == ".." || seg.contains('\\'));
    if invalid {
        Err(StorageError::InvalidKey(key.to_string()))
    } else {
        Ok(())
    }
}
