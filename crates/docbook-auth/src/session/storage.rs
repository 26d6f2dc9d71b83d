//! In-memory client storage.

use std::collections::HashMap;
use std::sync::Mutex;

use docbook_core::error::AppError;
use docbook_core::result::AppResult;
use docbook_core::traits::ClientStorage;

/// Process-local stand-in for a browser tab's session storage.
#[derive(Debug, Default)]
pub struct MemoryClientStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryClientStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::internal("Client storage lock poisoned"))
    }
}

impl ClientStorage for MemoryClientStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    fn clear(&self) -> AppResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryClientStorage::new();
        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v2".to_string()));
        assert!(storage.remove("k").unwrap());
        assert!(!storage.remove("k").unwrap());
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let storage = MemoryClientStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
        assert_eq!(storage.get("b").unwrap(), None);
    }
}
