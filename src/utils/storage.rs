use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// String key/value storage with the semantics of the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share entries, like two handles on the same
/// browser storage area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{window, Storage};

    use super::KeyValueStore;
    use crate::error::StorageError;

    /// `localStorage` or `sessionStorage` of the current window.
    #[derive(Clone)]
    pub struct BrowserStorage {
        storage: Storage,
    }

    impl BrowserStorage {
        /// Durable storage, survives browser restarts.
        pub fn local() -> Result<Self, StorageError> {
            let storage = window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
                .local_storage()
                .ok()
                .flatten()
                .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))?;
            Ok(Self { storage })
        }

        /// Tab-scoped storage.
        pub fn session() -> Result<Self, StorageError> {
            let storage = window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
                .session_storage()
                .ok()
                .flatten()
                .ok_or_else(|| StorageError::Unavailable("sessionStorage".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage
                .remove_item(key)
                .map_err(|_| StorageError::Remove(key.to_string()))
        }
    }
}
