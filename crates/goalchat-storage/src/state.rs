use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON value stored under `key`. Returns `Ok(None)` if nothing is
/// stored yet.
pub fn load_state<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.load(key)? {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_state<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string(value)?;
    store.save(key, &text)
}
