//! Key-Value Store Module
//!
//! Assignments are persisted through the [`KvStore`] trait, a synchronous
//! string-to-string store with the same shape as browser local storage:
//! - [`MemoryKvStore`]: in-memory, lost on process restart
//! - [`JsonFileKvStore`]: persisted to a single JSON file
//! - `LocalStorageKvStore`: `window.localStorage` (wasm32 + `wasm` feature)
//!
//! # Example
//!
//! ```rust
//! use split_testing::kv::{KvStore, MemoryKvStore};
//!
//! # fn example() -> split_testing::Result<()> {
//! let store = MemoryKvStore::new();
//!
//! store.set("key", "value")?;
//! assert_eq!(store.get("key")?, Some("value".to_string()));
//!
//! store.remove("key")?;
//! assert!(!store.exists("key")?);
//! # Ok(())
//! # }
//! ```

mod file;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod local_storage;
mod memory;

pub use file::JsonFileKvStore;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use local_storage::LocalStorageKvStore;
pub use memory::MemoryKvStore;

use crate::Result;

/// Key-value store consumed by the assignment layer.
///
/// Implementations report their own failures through [`crate::Error`]; the
/// engine propagates them without wrapping or retrying.
pub trait KvStore {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Errors
    /// Returns the backend's error if the read fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value for a key.
    ///
    /// Overwrites any existing value.
    ///
    /// # Errors
    /// Returns the backend's error if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key.
    ///
    /// No-op if the key doesn't exist.
    ///
    /// # Errors
    /// Returns the backend's error if the removal fails.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check if a key exists.
    ///
    /// # Errors
    /// Returns the backend's error if the read fails.
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }
}
