//! Write-through JSON file backend
//!
//! The file holds a single JSON object mapping keys to string values. Every operation
//! goes to disk: reads parse the file, writes parse, modify and rewrite it. Nothing is
//! cached between calls, so a second handle on the same path sees writes immediately.
//! Rewrites go through a temp file in the same directory, so an interrupted write leaves
//! the previous contents in place.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use super::{Storage, StorageError};
use crate::Result;

/// A [`Storage`] implementation persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFile {
    /// Opens storage backed by `path`. The file is created on first write.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) if json.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(json) => serde_json::from_str(&json).map_err(|source| -> crate::Error {
                StorageError::Corrupt {
                    path: self.path.clone(),
                    source,
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StorageError::FileIo {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    /// Replace the file atomically: write a sibling temp file, then rename it over `path`.
    fn store(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|source| StorageError::SerializationFailed { source })?;
        let file_io = |source: std::io::Error| StorageError::FileIo {
            path: self.path.clone(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(file_io)?;
        temp.write_all(json.as_bytes()).map_err(file_io)?;
        temp.as_file().sync_all().map_err(file_io)?;
        temp.persist(&self.path).map_err(|e| file_io(e.error))?;
        Ok(())
    }

    fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::LockPoisoned {
                reason: format!("write lock for {}", self.path.display()),
            })?;
        let mut values = self.load()?;
        f(&mut values);
        self.store(&values)
    }
}

impl Storage for JsonFile {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, path = %self.path.display(), "writing key");
        self.modify(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        debug!(key, path = %self.path.display(), "removing key");
        self.modify(|values| {
            values.remove(key);
        })
    }
}
