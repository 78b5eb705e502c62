//! # localStorage-backed store — browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It persists values into the browser's `localStorage` via
//! `web-sys`, which is where the original dashboard keeps its shown-alert
//! ledger, so existing installations keep their de-duplication history.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). `localStorage` can be disabled entirely or hit
//! its quota; either way the dashboard degrades to session-only behavior
//! rather than crashing. Concurrent tabs share the same keys and the last
//! writer wins — there is no cross-tab locking.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
///
/// A zero-size struct; the `web_sys::Storage` handle is re-acquired on every
/// operation because it is not `Clone` and lookups through `window()` are
/// cheap.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
