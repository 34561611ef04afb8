//! In-memory KV store implementation using `DashMap`.
//!
//! Data is lost on process restart. For persistence, use [`super::JsonFileKvStore`].

use super::KvStore;
use crate::Result;
use dashmap::DashMap;

/// In-memory key-value store using a concurrent hashmap.
///
/// Thread-safe, so one store can back several sessions in tests. Note that the
/// assignment layer performs read-then-write without locking across calls.
///
/// # Example
///
/// ```rust
/// use split_testing::kv::{KvStore, MemoryKvStore};
///
/// # fn example() -> split_testing::Result<()> {
/// let store = MemoryKvStore::new();
/// store.set("hello", "world")?;
/// assert_eq!(store.get("hello")?, Some("world".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryKvStore {
    store: DashMap<String, String>,
}

impl MemoryKvStore {
    /// Create a new in-memory KV store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Get the number of entries in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.store.contains_key(key))
    }
}
