use log::warn;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key-value store scoped to the page origin.
pub trait KeyValueStore {
    /// Missing keys and unreadable storage both come back as `None`.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// A flag counts as present only when it holds a non-empty value.
pub fn flag_present(store: &dyn KeyValueStore, key: &str) -> bool {
    store.get(key).map_or(false, |value| !value.is_empty())
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let Some(storage) = Self::storage() else {
            warn!("Local storage unavailable, treating {} as absent", key);
            return None;
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Reading {} from local storage failed: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
