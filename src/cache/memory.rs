//! Memory Store Module
//!
//! Plain in-process HashMap backend. No expiry, no eviction: it keeps
//! whatever it is given until told to delete it.

use std::collections::HashMap;

use crate::cache::{RawStore, StoredValue, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Memory Store ==
/// HashMap-backed [`RawStore`] with per-item size validation.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, StoredValue>,
    /// Maximum key length in bytes
    max_key_length: usize,
    /// Maximum JSON-encoded value size in bytes
    max_value_size: usize,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store with the default limits.
    pub fn new() -> Self {
        Self::with_limits(MAX_KEY_LENGTH, MAX_VALUE_SIZE)
    }

    /// Creates an empty store with explicit limits.
    ///
    /// # Arguments
    /// * `max_key_length` - Maximum key length in bytes
    /// * `max_value_size` - Maximum JSON-encoded value size in bytes
    pub fn with_limits(max_key_length: usize, max_value_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_key_length,
            max_value_size,
        }
    }

    /// Creates an empty store with the limits from `config`.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_limits(config.max_key_length, config.max_value_size)
    }

    // == Validation ==
    fn validate_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
        }

        if key.len() > self.max_key_length {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                self.max_key_length
            )));
        }

        Ok(())
    }

    fn validate_value(&self, value: &StoredValue) -> Result<()> {
        let size = serde_json::to_vec(value)?.len();
        if size > self.max_value_size {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                self.max_value_size
            )));
        }

        Ok(())
    }

    // == Inspection ==
    /// Returns the current number of stored keys, stale or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RawStore for MemoryStore {
    type ReadOptions = ();
    type WriteOptions = ();
    type WriteResult = ();

    fn raw_read(&mut self, key: &str, _options: &()) -> Result<Option<StoredValue>> {
        Ok(self.entries.get(key).cloned())
    }

    fn raw_write(&mut self, key: &str, value: StoredValue, _options: ()) -> Result<()> {
        self.validate_key(key)?;
        self.validate_value(&value)?;

        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn raw_delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn raw_exists(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Entry;
    use serde_json::json;

    #[test]
    fn test_store_new() {
        let store = MemoryStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_write_and_read() {
        let mut store = MemoryStore::new();
        let value = StoredValue::Wrapped(Entry::new(json!("value1")));

        store.raw_write("key1", value.clone(), ()).unwrap();

        assert_eq!(store.raw_read("key1", &()).unwrap(), Some(value));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_read_nonexistent() {
        let mut store = MemoryStore::new();
        assert_eq!(store.raw_read("nonexistent", &()).unwrap(), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = MemoryStore::new();

        store.raw_write("key1", StoredValue::Raw(json!(1)), ()).unwrap();
        store.raw_write("key1", StoredValue::Raw(json!(2)), ()).unwrap();

        assert_eq!(store.raw_read("key1", &()).unwrap(), Some(StoredValue::Raw(json!(2))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_delete() {
        let mut store = MemoryStore::new();

        store.raw_write("key1", StoredValue::Raw(json!("v")), ()).unwrap();

        assert!(store.raw_delete("key1").unwrap());
        assert!(!store.raw_exists("key1").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store = MemoryStore::new();
        assert!(!store.raw_delete("nonexistent").unwrap());
    }

    #[test]
    fn test_store_empty_key() {
        let mut store = MemoryStore::new();

        let result = store.raw_write("", StoredValue::Raw(json!(1)), ());
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_store_key_too_long() {
        let mut store = MemoryStore::new();
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = store.raw_write(&long_key, StoredValue::Raw(json!(1)), ());
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_value_too_large() {
        let mut store = MemoryStore::with_limits(MAX_KEY_LENGTH, 64);
        let large_value = StoredValue::Raw(json!("x".repeat(128)));

        let result = store.raw_write("key", large_value, ());
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_store_from_config() {
        let config = CacheConfig {
            max_key_length: 4,
            ..CacheConfig::default()
        };
        let mut store = MemoryStore::from_config(&config);

        assert!(store.raw_write("abcd", StoredValue::Raw(json!(1)), ()).is_ok());
        assert!(store.raw_write("abcde", StoredValue::Raw(json!(1)), ()).is_err());
    }

    #[test]
    fn test_store_clear_and_keys() {
        let mut store = MemoryStore::new();
        store.raw_write("a", StoredValue::Raw(json!(1)), ()).unwrap();
        store.raw_write("b", StoredValue::Raw(json!(2)), ()).unwrap();

        let mut keys: Vec<&str> = store.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);

        store.clear();
        assert!(store.is_empty());
    }
}
