use std::sync::Mutex;

use crate::{CoreError, ParamStorage, StoredValue};

/// Append-only in-memory storage. The mutex serializes concurrent appends and
/// retrievals from multiple request handlers; data is lost on process exit.
pub struct InMemoryStorage {
    inner: Mutex<Vec<StoredValue>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Number of values stored so far. Equals the number of successful
    /// `store` calls since construction.
    pub fn len(&self) -> Result<usize, CoreError> {
        let values = self
            .inner
            .lock()
            .map_err(|_| CoreError::Storage("mutex poisoned".into()))?;
        Ok(values.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamStorage for InMemoryStorage {
    fn store(&self, value: StoredValue) -> Result<StoredValue, CoreError> {
        let mut values = self
            .inner
            .lock()
            .map_err(|_| CoreError::Storage("mutex poisoned".into()))?;
        values.push(value.clone());
        Ok(value)
    }

    fn retrieve(&self) -> Result<StoredValue, CoreError> {
        let values = self
            .inner
            .lock()
            .map_err(|_| CoreError::Storage("mutex poisoned".into()))?;
        values.last().cloned().ok_or(CoreError::EmptyStorage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn store_then_retrieve_roundtrip() {
        let storage = InMemoryStorage::new();
        let stored = storage.store(StoredValue::new("test param")).unwrap();
        assert_eq!(stored.as_str(), "test param");
        assert_eq!(storage.retrieve().unwrap(), stored);
        assert_eq!(storage.len().unwrap(), 1);
    }

    #[test]
    fn retrieve_returns_last_inserted() {
        let storage = InMemoryStorage::new();
        storage.store(StoredValue::new("first")).unwrap();
        storage.store(StoredValue::new("second")).unwrap();
        assert_eq!(storage.retrieve().unwrap().as_str(), "second");
    }

    #[test]
    fn retrieve_on_empty_fails_explicitly() {
        let storage = InMemoryStorage::new();
        let err = storage.retrieve().unwrap_err();
        assert!(matches!(err, CoreError::EmptyStorage));
    }

    #[test]
    fn duplicates_are_allowed() {
        let storage = InMemoryStorage::new();
        storage.store(StoredValue::new("same")).unwrap();
        storage.store(StoredValue::new("same")).unwrap();
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut handles = Vec::new();
        for t in 0..8 {
            let storage = Arc::clone(&storage);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    storage
                        .store(StoredValue::new(format!("t{t}-{i}")))
                        .unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(storage.len().unwrap(), 8 * 50);
    }
}
