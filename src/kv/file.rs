//! JSON file KV store.
//!
//! The whole map lives in memory and is rewritten to disk on every mutation,
//! which is fine for the handful of keys an assignment store holds.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::KvStore;
use crate::{Error, Result};

/// Persistent key-value store backed by a single JSON object file.
///
/// # Example
///
/// ```rust,no_run
/// use split_testing::kv::{JsonFileKvStore, KvStore};
///
/// # fn example() -> split_testing::Result<()> {
/// let store = JsonFileKvStore::open("assignments.json")?;
/// store.set("homepage-variant-name", "control")?;
///
/// // A later process sees the same value
/// let reopened = JsonFileKvStore::open("assignments.json")?;
/// assert_eq!(reopened.get("homepage-variant-name")?, Some("control".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JsonFileKvStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileKvStore {
    /// Open a store at `path`, loading existing entries.
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or is not a JSON
    /// object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of entries in the store.
    ///
    /// # Errors
    /// Returns error if the internal lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Check if the store is empty.
    ///
    /// # Errors
    /// Returns error if the internal lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Store("JSON file store lock poisoned".to_string()))
    }

    // Write to a sibling temp file, then rename over the target.
    // On failure the temp file is removed and the target is left as it was.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        let written = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    // Apply `mutate` to a copy, and keep the copy only once it is on disk.
    fn commit(&self, mutate: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<()> {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        if !mutate(&mut next) {
            return Ok(());
        }
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KvStore for JsonFileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.commit(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.commit(|entries| entries.remove(key).is_some())
    }
}
