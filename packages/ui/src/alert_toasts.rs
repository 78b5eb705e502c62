//! # Global alert notifications with de-duplication
//!
//! Call [`use_alert_toasts`] once at the application root to surface a toast
//! for every new alert, on whatever page the user is looking at. The alert
//! feed arrives through [`crate::fetch::use_recent_alerts_settled`]
//! (30-second refetch); each batch is a full-replacement snapshot, and the
//! [`AlertNotifier`] decides which entries are genuinely new by consulting
//! the persisted shown-alert ledger.
//!
//! Only batches from a completed fetch cycle are processed. Before the first
//! cycle settles the data signal holds a static placeholder, and toasting it
//! would both announce alerts nobody fetched and burn their ids into the
//! ledger, suppressing later real alerts that happen to share them.
//!
//! Severity maps to toast style: High → error, Medium → warning, anything
//! else → info. Emission order follows batch order — alerts are not
//! re-sorted here.
//!
//! The ledger is persisted through a [`KeyValueStore`] after any batch that
//! added ids, and pruned to its 100-entry cap every five minutes. If storage
//! is unavailable the in-memory ledger still de-duplicates for the rest of
//! the session.

use std::time::Duration;

use dioxus::prelude::*;

use api::{Alert, Priority};
use store::{KeyValueStore, ShownAlerts};

use crate::fetch::{sleep, use_recent_alerts_settled};
use crate::toast::{push_toast, use_toasts, ToastLevel};

const PRUNE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type PlatformStore = store::MemoryStore;

/// Platform-appropriate ledger storage: localStorage on the web build,
/// in-memory elsewhere.
fn make_store() -> PlatformStore {
    PlatformStore::new()
}

/// Decides which alerts in a batch deserve a notification, backed by the
/// persisted shown-alert ledger.
pub struct AlertNotifier<S: KeyValueStore> {
    store: S,
    shown: ShownAlerts,
}

impl<S: KeyValueStore> AlertNotifier<S> {
    /// Load the ledger from storage; absent or corrupt state starts empty.
    pub async fn load(store: S) -> Self {
        let shown = ShownAlerts::load(&store).await;
        Self { store, shown }
    }

    /// Process one feed snapshot. `None` means no fetch cycle has settled
    /// yet; nothing is emitted or recorded, so the pre-fetch placeholder can
    /// never claim ids in the ledger. Returns the `(style, message)` pairs
    /// to emit, in batch order, and persists the ledger when anything was
    /// new.
    pub async fn process(&mut self, feed: Option<&[Alert]>) -> Vec<(ToastLevel, String)> {
        let Some(alerts) = feed else {
            return Vec::new();
        };

        let mut emitted = Vec::new();
        for alert in alerts {
            if !self.shown.insert(&alert.id) {
                continue;
            }
            let level = match alert.priority {
                Priority::High => ToastLevel::Error,
                Priority::Medium => ToastLevel::Warning,
                Priority::Low => ToastLevel::Info,
            };
            emitted.push((level, format!("{} - {}", alert.title, alert.location)));
        }
        if !emitted.is_empty() {
            self.shown.save(&self.store).await;
        }
        emitted
    }

    /// Enforce the ledger's storage cap.
    pub async fn prune(&mut self) {
        self.shown.prune(&self.store).await;
    }

    pub fn shown(&self) -> &ShownAlerts {
        &self.shown
    }
}

/// Watch the alert feed and toast every previously-unseen alert.
///
/// Runs for the lifetime of the session; there is no terminal state.
pub fn use_alert_toasts() {
    let (alerts, settled) = use_recent_alerts_settled();
    let mut toasts = use_toasts();
    let mut notifier = use_signal(|| None::<AlertNotifier<PlatformStore>>);

    // Feed every fetched batch through the ledger. The notifier is taken
    // out of the signal while awaited so no borrow is held across awaits.
    use_effect(move || {
        let batch = alerts();
        let ready = settled();
        spawn(async move {
            let mut n = match notifier.take() {
                Some(n) => n,
                None => AlertNotifier::load(make_store()).await,
            };
            for (level, message) in n.process(ready.then_some(batch.as_slice())).await {
                push_toast(&mut toasts, level, &message);
            }
            notifier.set(Some(n));
        });
    });

    // Cap enforcement on a fixed timer.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(PRUNE_INTERVAL).await;
                let Some(mut n) = notifier.take() else {
                    continue;
                };
                n.prune().await;
                notifier.set(Some(n));
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PriorityColor;
    use store::{MemoryStore, SHOWN_ALERTS_CAP};

    fn alert(id: &str, priority: Priority) -> Alert {
        let (color, title) = match priority {
            Priority::High => (PriorityColor::Red, "Unauthorized Person Detected"),
            Priority::Medium => (PriorityColor::Yellow, "Camera Obstructed"),
            Priority::Low => (PriorityColor::Yellow, "Audio Anomaly"),
        };
        Alert {
            id: id.to_string(),
            icon: "person".to_string(),
            title: title.to_string(),
            location: "CAM_12 - Entrance Hall".to_string(),
            priority,
            time: "2 min ago".to_string(),
            priority_color: color,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_unsettled_feed_emits_and_records_nothing() {
        let store = MemoryStore::new();
        let mut notifier = AlertNotifier::load(store.clone()).await;

        // Before the first fetch cycle the feed carries only the static
        // placeholder; it must not toast and must not claim ids.
        let emitted = notifier.process(None).await;
        assert!(emitted.is_empty());
        assert_eq!(notifier.shown().len(), 0);
        assert!(store.get(store::SHOWN_ALERTS_KEY).await.is_none());

        // A real alert sharing a placeholder id ("1") still notifies once
        // a fetched batch arrives.
        let emitted = notifier.process(Some(&[alert("1", Priority::High)])).await;
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, ToastLevel::Error);
    }

    #[tokio::test]
    async fn test_first_batch_emits_styled_toasts() {
        let mut notifier = AlertNotifier::load(MemoryStore::new()).await;

        let emitted = notifier
            .process(Some(&[alert("1", Priority::High), alert("2", Priority::Medium)]))
            .await;

        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].0, ToastLevel::Error);
        assert_eq!(
            emitted[0].1,
            "Unauthorized Person Detected - CAM_12 - Entrance Hall"
        );
        assert_eq!(emitted[1].0, ToastLevel::Warning);
        assert!(notifier.shown().contains("1"));
        assert!(notifier.shown().contains("2"));
    }

    #[tokio::test]
    async fn test_repeat_batch_emits_only_new_alerts() {
        let mut notifier = AlertNotifier::load(MemoryStore::new()).await;
        notifier
            .process(Some(&[alert("1", Priority::High), alert("2", Priority::Medium)]))
            .await;

        let emitted = notifier
            .process(Some(&[
                alert("1", Priority::High),
                alert("2", Priority::Medium),
                alert("3", Priority::Low),
            ]))
            .await;

        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, ToastLevel::Info);
        assert_eq!(notifier.shown().len(), 3);
    }

    #[tokio::test]
    async fn test_ledger_survives_reload() {
        let store = MemoryStore::new();

        let mut notifier = AlertNotifier::load(store.clone()).await;
        notifier.process(Some(&[alert("1", Priority::High)])).await;

        // Fresh notifier against the same storage: the alert stays seen.
        let mut reloaded = AlertNotifier::load(store).await;
        let emitted = reloaded
            .process(Some(&[alert("1", Priority::High)]))
            .await;
        assert!(emitted.is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_does_not_write_storage() {
        let store = MemoryStore::new();
        let mut notifier = AlertNotifier::load(store.clone()).await;

        notifier.process(Some(&[])).await;
        assert!(store.get(store::SHOWN_ALERTS_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_prune_caps_the_ledger() {
        let store = MemoryStore::new();
        let mut notifier = AlertNotifier::load(store.clone()).await;

        for i in 0..130 {
            notifier
                .process(Some(&[alert(&format!("a{i}"), Priority::Low)]))
                .await;
        }
        notifier.prune().await;

        assert_eq!(notifier.shown().len(), SHOWN_ALERTS_CAP);
        assert!(!notifier.shown().contains("a0"));
        assert!(notifier.shown().contains("a129"));

        // A pruned id notifies again on its next appearance.
        let emitted = notifier
            .process(Some(&[alert("a0", Priority::Low)]))
            .await;
        assert_eq!(emitted.len(), 1);
    }
}
