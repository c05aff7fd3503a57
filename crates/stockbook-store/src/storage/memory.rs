//! In-memory storage.

use std::collections::HashMap;

use super::KeyValueStorage;
use crate::error::{StoreError, StoreResult};

/// HashMap-backed storage with an optional size quota.
///
/// The quota mimics the few-megabyte cap browsers put on local storage,
/// which embedded product images can hit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStorage {
            items: HashMap::new(),
            quota_bytes: Some(bytes),
        }
    }

    /// Pre-populates a slot (for tests and fixtures).
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Bytes used by everything except `key`.
    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::unavailable(format!(
                    "quota exceeded: {needed} bytes needed, {quota} allowed"
                )));
            }
        }

        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "123456789").unwrap();
        storage.set_item("k", "987654321").unwrap();

        let err = storage.set_item("k", "1234567890").unwrap_err();
        assert!(matches!(err, StoreError::PersistenceUnavailable(_)));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("987654321"));
    }
}
