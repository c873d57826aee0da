use crate::error::{Result, StorageError};
use crate::key_value_store::KeyValueStore;

use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store backed by a hash map.
///
/// Used as the test fake and for ephemeral sessions that should not outlive
/// the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::poisoned(key))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
