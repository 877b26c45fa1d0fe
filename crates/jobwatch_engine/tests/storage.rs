use std::fs;

use jobwatch_engine::{LocalStorage, StorageError, STORAGE_FILENAME};
use tempfile::TempDir;

#[test]
fn values_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let mut storage = LocalStorage::open(temp.path());
    storage.set_json("darkMode", &true).unwrap();
    storage.set_item("note", "hello").unwrap();

    let reopened = LocalStorage::open(temp.path());
    assert_eq!(reopened.get_json::<bool>("darkMode").unwrap(), Some(true));
    assert_eq!(reopened.get_item("darkMode"), Some("true"));
    assert_eq!(reopened.get_item("note"), Some("hello"));
}

#[test]
fn missing_dir_is_created_on_first_write() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested").join("state");
    let mut storage = LocalStorage::open(&dir);
    assert_eq!(storage.get_item("darkMode"), None);

    storage.set_json("darkMode", &false).unwrap();
    assert!(dir.join(STORAGE_FILENAME).is_file());
}

#[test]
fn corrupt_file_gives_empty_store() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(STORAGE_FILENAME), "{{ not ron").unwrap();
    let storage = LocalStorage::open(temp.path());
    assert_eq!(storage.get_item("darkMode"), None);
}

#[test]
fn non_json_value_is_reported() {
    let temp = TempDir::new().unwrap();
    let mut storage = LocalStorage::open(temp.path());
    storage.set_item("darkMode", "maybe").unwrap();
    let err = storage.get_json::<bool>("darkMode").unwrap_err();
    assert!(matches!(err, StorageError::Value { ref key, .. } if key == "darkMode"));
}

#[test]
fn remove_item_persists() {
    let temp = TempDir::new().unwrap();
    let mut storage = LocalStorage::open(temp.path());
    storage.set_item("a", "1").unwrap();
    storage.remove_item("a").unwrap();
    storage.remove_item("never-set").unwrap();
    assert_eq!(LocalStorage::open(temp.path()).get_item("a"), None);
}

#[test]
fn write_into_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let mut storage = LocalStorage::open(&file_path);
    let err = storage.set_item("a", "1").unwrap_err();
    assert!(matches!(err, StorageError::Dir(_)));
}
