//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Values
//! survive page reloads and are scoped to the site's origin.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (sandboxed iframes) or refuse writes (quota,
//! private mode). Reads then return `None` and writes are dropped with a
//! warning, so a broken store degrades to "not signed in" rather than a crash.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, not persisting {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage refused write for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!("localStorage refused removal of {key}");
            }
        }
    }
}
