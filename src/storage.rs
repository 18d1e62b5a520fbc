//! Browser Storage
//!
//! `window.localStorage` behind the checklist store's storage trait.

use checklist_store::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    /// Read a slot, treating any failure as absent
    pub fn read(key: &str) -> Option<String> {
        Self.get(key).ok().flatten()
    }

    /// Write a slot, logging failures
    pub fn write(key: &str, value: &str) {
        if let Err(e) = Self.set(key, value) {
            log::error!("[STORAGE] {}", e);
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
