//! # Shown-alert ledger — the de-duplication record for alert notifications
//!
//! [`ShownAlerts`] tracks which alert identifiers have already surfaced a
//! toast, so an alert is notified at most once even across page reloads. The
//! ledger is persisted as a JSON array of id strings under
//! [`SHOWN_ALERTS_KEY`] through any [`KeyValueStore`].
//!
//! Insertion order is preserved: the array is ordered oldest-first, which is
//! what lets [`prune`](ShownAlerts::prune) evict the oldest entries when the
//! ledger grows past [`SHOWN_ALERTS_CAP`]. Within a session membership only
//! grows; the periodic prune is the single exception and removes only from
//! the front.
//!
//! A missing or unparsable stored value is treated as an empty ledger —
//! storage failures are never fatal here, they just reset de-duplication
//! history.

use std::collections::HashSet;

use crate::kv::KeyValueStore;

/// Storage key holding the JSON array of previously-notified alert ids.
pub const SHOWN_ALERTS_KEY: &str = "shownAlerts";

/// Maximum number of ids kept in storage; older entries are evicted first.
pub const SHOWN_ALERTS_CAP: usize = 100;

/// Ordered set of alert ids that have already produced a notification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShownAlerts {
    /// Ids in insertion order, oldest first.
    ids: Vec<String>,
    /// Membership index over `ids`.
    seen: HashSet<String>,
}

impl ShownAlerts {
    /// Load the persisted ledger, falling back to empty when the key is
    /// absent or holds something that is not a JSON string array.
    pub async fn load<S: KeyValueStore>(store: &S) -> Self {
        let Some(raw) = store.get(SHOWN_ALERTS_KEY).await else {
            return Self::default();
        };
        let Ok(ids) = serde_json::from_str::<Vec<String>>(&raw) else {
            return Self::default();
        };
        Self::from_ids(ids)
    }

    fn from_ids(ids: Vec<String>) -> Self {
        let mut shown = Self::default();
        for id in ids {
            shown.insert(&id);
        }
        shown
    }

    /// Record an id as shown. Returns `true` iff the id was not present yet.
    pub fn insert(&mut self, id: &str) -> bool {
        if !self.seen.insert(id.to_string()) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Persist the full ordered ledger. Storage failures are swallowed by
    /// the store, so this cannot fail.
    pub async fn save<S: KeyValueStore>(&self, store: &S) {
        if let Ok(raw) = serde_json::to_string(&self.ids) {
            store.set(SHOWN_ALERTS_KEY, &raw).await;
        }
    }

    /// Enforce the storage cap: keep the [`SHOWN_ALERTS_CAP`] most-recently
    /// added ids and rewrite storage. A no-op while under the cap.
    pub async fn prune<S: KeyValueStore>(&mut self, store: &S) {
        if self.ids.len() <= SHOWN_ALERTS_CAP {
            return;
        }
        let keep_from = self.ids.len() - SHOWN_ALERTS_CAP;
        let recent = self.ids.split_off(keep_from);
        self.ids = recent;
        self.seen = self.ids.iter().cloned().collect();
        self.save(store).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let shown = ShownAlerts::load(&store).await;
        assert!(shown.is_empty());
    }

    #[tokio::test]
    async fn test_load_garbage_is_empty() {
        let store = MemoryStore::new();
        store.set(SHOWN_ALERTS_KEY, "{not json at all").await;
        assert!(ShownAlerts::load(&store).await.is_empty());

        store.set(SHOWN_ALERTS_KEY, "{\"a\":1}").await;
        assert!(ShownAlerts::load(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let mut shown = ShownAlerts::default();
        assert!(shown.insert("1"));
        assert!(!shown.insert("1"));
        assert_eq!(shown.len(), 1);
        assert!(shown.contains("1"));
        assert!(!shown.contains("2"));
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let store = MemoryStore::new();
        let mut shown = ShownAlerts::default();
        shown.insert("3");
        shown.insert("1");
        shown.insert("2");
        shown.save(&store).await;

        let reloaded = ShownAlerts::load(&store).await;
        assert_eq!(reloaded, shown);
        for id in ["1", "2", "3"] {
            assert!(reloaded.contains(id));
        }
    }

    #[tokio::test]
    async fn test_prune_keeps_most_recent() {
        let store = MemoryStore::new();
        let mut shown = ShownAlerts::default();
        for i in 0..150 {
            shown.insert(&format!("alert-{i}"));
        }

        shown.prune(&store).await;

        assert_eq!(shown.len(), SHOWN_ALERTS_CAP);
        // Oldest evicted, newest retained.
        assert!(!shown.contains("alert-0"));
        assert!(!shown.contains("alert-49"));
        assert!(shown.contains("alert-50"));
        assert!(shown.contains("alert-149"));

        // Storage was rewritten to match.
        let reloaded = ShownAlerts::load(&store).await;
        assert_eq!(reloaded, shown);
    }

    #[tokio::test]
    async fn test_prune_under_cap_is_noop() {
        let store = MemoryStore::new();
        let mut shown = ShownAlerts::default();
        shown.insert("only");
        shown.prune(&store).await;

        assert_eq!(shown.len(), 1);
        // Did not write storage: nothing to rewrite under the cap.
        assert!(store.get(SHOWN_ALERTS_KEY).await.is_none());
    }
}
