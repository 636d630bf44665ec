//! Key-value storage abstraction over `window.localStorage`.
//!
//! The session store is injectable for tests, so the actual storage medium
//! sits behind a small trait. `LocalStorage` is the browser-backed
//! implementation (hydrate only); `MemoryStorage` backs native unit tests
//! and the SSR render pass, where no browser storage exists.

use std::cell::RefCell;
use std::collections::HashMap;

/// Error writing to the underlying storage medium.
///
/// Reads never error: a missing or unreadable entry is simply absent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write \"{key}\" to storage")]
    WriteFailed { key: String },
}

/// String key-value store with last-writer-wins semantics.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory backend for unit tests and non-browser render passes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage` backend. Construction fails outside a browser
/// context or when the user has storage disabled.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key: key.to_owned() })
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
