//! # Fallback data fetching
//!
//! Every remote read in the dashboard goes through
//! [`use_with_fallback`]: a hook that wraps a server-function call with a
//! static fallback value, so consumers always observe a value of the
//! expected shape and never an error state. Failures are logged via
//! `tracing` and swallowed — the deliberate "always degrade, never crash"
//! policy of this dashboard.
//!
//! Two knobs are available per call site through [`FetchOptions`]:
//!
//! - a **refetch interval** that silently re-runs the fetch on a fixed
//!   period, and
//! - a **staleness window** that suppresses a refetch while the last
//!   successful result is recent enough.
//!
//! The periodic refetch works by bumping a tick signal the fetch resource
//! subscribes to. Restarting the resource drops any in-flight future, so a
//! slow earlier fetch can never overwrite the result of a newer one.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;

use api::{Alert, LiveFeed, MotionPoint, ResolvedIncident, StressIndex, SummaryStats};

/// Per-call-site fetch behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FetchOptions {
    /// Re-run the fetch on this period. `None` fetches once on mount.
    pub refetch_interval: Option<Duration>,
    /// Skip a periodic refetch while the last result is younger than this.
    pub stale_time: Option<Duration>,
}

impl FetchOptions {
    /// Options with a refetch interval in seconds.
    pub fn interval(secs: u64) -> Self {
        Self {
            refetch_interval: Some(Duration::from_secs(secs)),
            stale_time: None,
        }
    }

    /// Builder method to set the staleness window in seconds.
    pub fn with_stale_time(mut self, secs: u64) -> Self {
        self.stale_time = Some(Duration::from_secs(secs));
        self
    }
}

/// Await a remote call, substituting `fallback` on any failure.
pub async fn fetch_or_fallback<T, Fut>(key: &str, call: Fut, fallback: T) -> T
where
    Fut: Future<Output = Result<T, ServerFnError>>,
{
    match call.await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, %err, "remote call failed, serving fallback data");
            fallback
        }
    }
}

/// Platform-aware async sleep.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Milliseconds since the Unix epoch, on both wasm and native.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Fetch through a server function with a static fallback.
///
/// The returned signal starts at the fallback value and is updated in place
/// after each fetch cycle; consumers treat every update as a
/// full-replacement snapshot.
pub fn use_with_fallback<T, F, Fut>(
    key: &'static str,
    call: F,
    fallback: T,
    options: FetchOptions,
) -> Signal<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    use_with_fallback_settled(key, call, fallback, options).0
}

/// Like [`use_with_fallback`], additionally exposing whether at least one
/// fetch cycle has completed.
///
/// Until the first cycle settles, the data signal holds the initial fallback
/// placeholder — a value no fetch produced. Consumers that act on batches
/// (rather than just render them) check the settled flag so they never treat
/// the placeholder as fetched data.
pub fn use_with_fallback_settled<T, F, Fut>(
    key: &'static str,
    call: F,
    fallback: T,
    options: FetchOptions,
) -> (Signal<T>, Signal<bool>)
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let mut data = use_signal({
        let fallback = fallback.clone();
        move || fallback.clone()
    });
    let mut settled = use_signal(|| false);
    let mut tick = use_signal(|| 0u64);
    let mut last_fetched = use_signal(|| None::<f64>);

    let _fetcher = use_resource(move || {
        let call = call.clone();
        let fallback = fallback.clone();
        // Subscribe to the refetch tick; each bump restarts the resource
        // and cancels the previous in-flight request.
        let _generation = tick();
        async move {
            let value = fetch_or_fallback(key, call(), fallback).await;
            last_fetched.set(Some(now_ms()));
            if data.peek().clone() != value {
                data.set(value);
            }
            if !*settled.peek() {
                settled.set(true);
            }
        }
    });

    use_effect(move || {
        let Some(interval) = options.refetch_interval else {
            return;
        };
        spawn(async move {
            loop {
                sleep(interval).await;
                if let (Some(stale), Some(at)) = (options.stale_time, last_fetched.peek().clone())
                {
                    if now_ms() - at < stale.as_millis() as f64 {
                        continue;
                    }
                }
                tick += 1;
            }
        });
    });

    (data, settled)
}

pub fn use_summary_stats() -> Signal<SummaryStats> {
    use_with_fallback(
        "summary-stats",
        api::get_summary_stats,
        api::mock::summary_stats(),
        FetchOptions::default(),
    )
}

/// Recent alerts, refetched every 30 seconds so new alerts surface as
/// notifications across the application; results younger than 10 seconds
/// are considered fresh.
pub fn use_recent_alerts() -> Signal<Vec<Alert>> {
    use_recent_alerts_settled().0
}

/// [`use_recent_alerts`] plus the settled flag, for the notification layer
/// which must ignore the pre-fetch placeholder batch.
pub fn use_recent_alerts_settled() -> (Signal<Vec<Alert>>, Signal<bool>) {
    use_with_fallback_settled(
        "alerts/recent",
        api::get_recent_alerts,
        api::mock::alerts(),
        FetchOptions::interval(30).with_stale_time(10),
    )
}

pub fn use_stress_index() -> Signal<StressIndex> {
    use_with_fallback(
        "stress-index",
        api::get_stress_index,
        api::mock::stress_index(),
        FetchOptions::default(),
    )
}

pub fn use_motion_chart() -> Signal<Vec<MotionPoint>> {
    use_with_fallback(
        "motion-chart",
        api::get_motion_chart,
        api::mock::motion_data(),
        FetchOptions::default(),
    )
}

pub fn use_live_feeds() -> Signal<Vec<LiveFeed>> {
    use_with_fallback(
        "live-feeds",
        api::get_live_feeds,
        api::mock::live_feeds(),
        FetchOptions::default(),
    )
}

pub fn use_resolved_incidents() -> Signal<Vec<ResolvedIncident>> {
    use_with_fallback(
        "incidents/resolved",
        api::get_resolved_incidents,
        api::mock::resolved_incidents(),
        FetchOptions::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_passes_value_through() {
        let value = fetch_or_fallback("k", async { Ok::<_, ServerFnError>(7u32) }, 0u32).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_failure_returns_fallback_exactly() {
        let fallback = api::mock::summary_stats();
        let value = fetch_or_fallback(
            "summary-stats",
            async { Err::<SummaryStats, _>(ServerFnError::new("connection refused")) },
            fallback.clone(),
        )
        .await;
        assert_eq!(value, fallback);
    }

    #[tokio::test]
    async fn test_failure_returns_fallback_list() {
        let fallback = api::mock::alerts();
        let value = fetch_or_fallback(
            "alerts/recent",
            async { Err::<Vec<Alert>, _>(ServerFnError::new("503")) },
            fallback.clone(),
        )
        .await;
        assert_eq!(value, fallback);
    }
}
