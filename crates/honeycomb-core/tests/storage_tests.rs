use honeycomb_core::seed::default_hive;
use honeycomb_core::{BeeHive, FileStorage, Storage, StorageError};
use tempfile::TempDir;

fn create_test_storage() -> (FileStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::new(temp_dir.path());
    (storage, temp_dir)
}

#[test]
fn test_save_and_load_hive() {
    let (storage, _temp) = create_test_storage();
    let hive = default_hive();

    storage.save_hive("app_root", &hive).unwrap();
    let loaded = storage.load_hive("app_root").unwrap();

    assert_eq!(loaded, hive);
    assert_eq!(loaded.index(), hive.index());
}

#[test]
fn test_repeated_save_is_idempotent() {
    let (storage, _temp) = create_test_storage();
    let hive = default_hive();

    storage.save_hive("app_root", &hive).unwrap();
    storage.save_hive("app_root", &hive).unwrap();

    assert_eq!(storage.list_keys().unwrap(), vec!["app_root"]);
    assert_eq!(storage.load_hive("app_root").unwrap(), hive);
}

#[test]
fn test_hive_exists() {
    let (storage, _temp) = create_test_storage();
    assert!(!storage.hive_exists("app_root").unwrap());

    storage.save_hive("app_root", &BeeHive::new()).unwrap();
    assert!(storage.hive_exists("app_root").unwrap());
}

#[test]
fn test_load_missing_hive() {
    let (storage, _temp) = create_test_storage();
    let result = storage.load_hive("nope");
    assert!(matches!(result, Err(StorageError::NotFound(key)) if key == "nope"));
}

#[test]
fn test_delete_hive() {
    let (storage, _temp) = create_test_storage();
    storage.save_hive("app_root", &BeeHive::new()).unwrap();

    storage.delete_hive("app_root").unwrap();
    assert!(!storage.hive_exists("app_root").unwrap());
    assert!(matches!(
        storage.delete_hive("app_root"),
        Err(StorageError::NotFound(_))
    ));
}

#[test]
fn test_list_keys_with_nested_keys() {
    let (storage, _temp) = create_test_storage();
    assert!(storage.list_keys().unwrap().is_empty());

    let hive = BeeHive::new();
    storage.save_hive("app_root", &hive).unwrap();
    storage.save_hive("backups/2024-01-02", &hive).unwrap();
    storage.save_hive("backups/2024-01-01", &hive).unwrap();

    assert_eq!(
        storage.list_keys().unwrap(),
        vec!["app_root", "backups/2024-01-01", "backups/2024-01-02"]
    );
}

#[test]
fn test_invalid_keys_rejected() {
    let (storage, _temp) = create_test_storage();
    let hive = BeeHive::new();

    for key in ["", "a//b", "../up", "a/./b"] {
        assert!(
            matches!(storage.save_hive(key, &hive), Err(StorageError::InvalidKey(_))),
            "key {key:?} accepted"
        );
    }
}

#[test]
fn test_corrupt_document_is_json_error() {
    let (storage, temp) = create_test_storage();
    std::fs::write(temp.path().join("app_root.json"), "{not json").unwrap();

    assert!(matches!(
        storage.load_hive("app_root"),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn test_dotted_keys_are_distinct_documents() {
    let (storage, _temp) = create_test_storage();
    let mut first = BeeHive::new();
    first.set_name("app_root", "first");
    let mut second = BeeHive::new();
    second.set_name("app_root", "second");

    storage.save_hive("backup", &first).unwrap();
    storage.save_hive("backup.v2", &second).unwrap();
    storage.save_hive("nested/backup.v2", &second).unwrap();

    assert_eq!(storage.load_hive("backup").unwrap().title(), "first");
    assert_eq!(storage.load_hive("backup.v2").unwrap().title(), "second");
    assert_eq!(
        storage.list_keys().unwrap(),
        vec!["backup", "backup.v2", "nested/backup.v2"]
    );
}

#[test]
fn test_unknown_format_version_rejected() {
    let (storage, temp) = create_test_storage();
    storage.save_hive("app_root", &BeeHive::new()).unwrap();

    let path = temp.path().join("app_root.json");
    let mut document: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    document["version"] = serde_json::json!(99);
    std::fs::write(&path, document.to_string()).unwrap();

    assert!(matches!(
        storage.load_hive("app_root"),
        Err(StorageError::UnsupportedVersion { version: 99, .. })
    ));
}
