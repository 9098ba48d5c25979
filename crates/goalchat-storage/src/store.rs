use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use crate::error::StorageError;

/// A flat key-value store holding text values.
///
/// An absent key is reported as `Ok(None)`, never as an error: callers treat
/// it as "no prior state". There is no versioning and no cross-process
/// coordination; the last writer wins.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as one file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "no stored value");
                Ok(None)
            }
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write to a temp file then rename so a reader never sees half a value.
        let tmp_path = self.dir.join(format!("{key}.tmp"));
        std::fs::write(&tmp_path, value.as_bytes()).map_err(write_err)?;
        std::fs::rename(&tmp_path, &path).map_err(write_err)?;

        debug!(key, bytes = value.len(), "value saved");
        Ok(())
    }
}

/// Process-local store, used by tests and as a scratch store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing values.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
