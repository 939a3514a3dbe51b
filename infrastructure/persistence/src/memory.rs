use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{KeyValueStorage, StorageError, check_quota};

/// Process-local side-store; contents vanish with the process.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new(quota_bytes: Option<usize>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(None)
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("memory storage lock poisoned".to_string())
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(poisoned)?;

        let others: usize = entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        check_quota(key, others + key.len() + value.len(), self.quota_bytes)?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

}
