//! Key-Value Storage
//!
//! Persistence backends for the todo list: the browser's `localStorage`
//! and an in-memory map used when that is unavailable (and in tests).

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::models::Todo;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to read key {0}")]
    Read(String),

    #[error("failed to write key {0}")]
    Write(String),
}

/// Synchronous string key-value store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Fails when the quota is exceeded or storage is disabled
        self.inner
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// Session-only storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Open `localStorage`, falling back to memory for this session
pub fn open_default() -> Box<dyn Storage> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("{}, todos will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}

/// Read persisted todos. Missing, unreadable or malformed data yields an empty list.
pub fn load_todos(storage: &dyn Storage, key: &str) -> Vec<Todo> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("{}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => todos,
        Err(e) => {
            tracing::warn!("ignoring malformed data under {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite the persisted list (last write wins)
pub fn save_todos(storage: &dyn Storage, key: &str, todos: &[Todo]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(todos).map_err(|_| StorageError::Write(key.to_string()))?;
    storage.set(key, &raw)
}
