//! Browser `window.localStorage` KV store (wasm32 only).

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::KvStore;
use crate::{Error, Result};

/// Key-value store backed by the browser's local storage.
///
/// This is the default store when an experiment is resolved in the browser
/// without an explicit store.
#[derive(Debug, Clone)]
pub struct LocalStorageKvStore {
    storage: Storage,
}

impl LocalStorageKvStore {
    /// Acquire `window.localStorage`.
    ///
    /// # Errors
    /// Returns error if there is no window or local storage is disabled.
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Store("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| Error::Store("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Store(format!("localStorage: {value:?}"))
}

impl KvStore for LocalStorageKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}
