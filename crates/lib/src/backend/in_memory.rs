//! In-memory storage backend
//!
//! Suitable for tests and ephemeral use. The whole map can be saved to and loaded
//! from a JSON file, but nothing is persisted implicitly.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use tracing::debug;

use super::{Storage, StorageError};
use crate::Result;

/// A `HashMap`-backed [`Storage`] implementation.
#[derive(Debug, Default)]
pub struct InMemory {
    values: RwLock<HashMap<String, String>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given key/value pairs.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Returns the keys currently present, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let values = self.read()?;
        let mut keys: Vec<String> = values.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Saves the entire map to `path` as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = {
            let values = self.read()?;
            serde_json::to_string_pretty(&*values)
                .map_err(|source| StorageError::SerializationFailed { source })?
        };
        std::fs::write(path, json).map_err(|source| StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved in-memory storage");
        Ok(())
    }

    /// Loads a map previously written by [`save_to_file`](Self::save_to_file).
    ///
    /// If the file does not exist, a new, empty store is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let values: HashMap<String, String> =
                    serde_json::from_str(&json).map_err(|source| StorageError::Corrupt {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(Self {
                    values: RwLock::new(values),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(StorageError::FileIo {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, String>>> {
        self.values.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.values.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> crate::Error {
    StorageError::LockPoisoned {
        reason: "in-memory values".to_string(),
    }
    .into()
}

impl Storage for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        Ok(())
    }
}
