//! Key-value persistence seam. Browser and native backends live in
//! `crate::platform`; `MemoryStore` backs tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Synchronous string store. Reads and writes are whole values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same map, which lets a test reopen the
/// "same" storage from a second controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<RefCell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Simulates a full quota: every subsequent `set` fails.
    pub fn reject_writes(&self, reject: bool) {
        *self.reject_writes.borrow_mut() = reject;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.reject_writes.borrow() {
            return Err(StorageError::Rejected("quota exceeded".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
