//! Durable key-value storage for client preferences.
//!
//! Values are strings, typically JSON documents, kept in a single RON file
//! that is rewritten atomically on every change.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jobwatch_logging::{jw_info, jw_warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

pub const STORAGE_FILENAME: &str = "local_storage.ron";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage directory missing or not writable: {0}")]
    Dir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode storage file: {0}")]
    Encode(String),
    #[error("value stored under {key} is not valid JSON: {message}")]
    Value { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Loads the storage file in `dir`. A missing or unreadable file gives
    /// an empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(STORAGE_FILENAME);
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match ron::from_str::<BTreeMap<String, String>>(&text) {
                Ok(entries) => {
                    jw_info!("Loaded {} stored value(s) from {:?}", entries.len(), path);
                    entries
                }
                Err(err) => {
                    jw_warn!("Failed to parse storage file {:?}: {}", path, err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                jw_warn!("Failed to read storage file {:?}: {}", path, err);
                BTreeMap::new()
            }
        };
        Self { dir, entries }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get_item(key) else {
            return Ok(None);
        };
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|err| StorageError::Value {
                key: key.to_string(),
                message: err.to_string(),
            })
    }

    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|err| StorageError::Value {
            key: key.to_string(),
            message: err.to_string(),
        })?;
        self.set_item(key, raw)
    }

    fn flush(&self) -> Result<(), StorageError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&self.entries, pretty)
            .map_err(|err| StorageError::Encode(err.to_string()))?;
        write_atomic(&self.dir, STORAGE_FILENAME, &content)?;
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StorageError::Dir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StorageError::Dir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StorageError::Dir(e.to_string()))?;
    }
    Ok(())
}

/// Writes `{dir}/{filename}` through a temp file in the same directory and
/// a rename, so readers never see a half-written file.
fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, StorageError> {
    ensure_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|e| StorageError::Io(e.error))?;
    Ok(target)
}
