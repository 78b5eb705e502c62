//! # Key-value persistence — abstract string store
//!
//! Vigil persists a small amount of client-side state (most importantly the
//! shown-alert ledger, see [`crate::shown`]) through the [`KeyValueStore`]
//! trait rather than touching browser APIs directly. This keeps the dashboard
//! logic testable against [`crate::MemoryStore`] and lets the web build swap
//! in `localStorage` via `LocalStore`.
//!
//! ## Failure semantics
//!
//! Every implementation swallows storage errors: reads return `None`, writes
//! do nothing. A disabled or full `localStorage` degrades a feature to
//! session-only behavior instead of crashing the dashboard.

/// Async trait for storing and retrieving small string values by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}
