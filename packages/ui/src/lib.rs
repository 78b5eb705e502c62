//! This crate contains all shared UI for the workspace: the
//! fallback-fetching hooks, the toast and alert-notification layers, the
//! auth context, and the dashboard widgets.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod fetch;
pub use fetch::{
    use_live_feeds, use_motion_chart, use_recent_alerts, use_recent_alerts_settled,
    use_resolved_incidents, use_stress_index, use_summary_stats, use_with_fallback,
    use_with_fallback_settled, FetchOptions,
};

pub mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost, ToastLevel, ToastProvider, ToastStack};

pub mod alert_toasts;
pub use alert_toasts::{use_alert_toasts, AlertNotifier};

mod auth;
pub use auth::{
    login, login_with_google, logout, reset_password, signup, use_auth, AuthError, AuthProvider,
    AuthState, LogoutButton,
};

mod summary_cards;
pub use summary_cards::SummaryCards;

mod recent_alerts;
pub use recent_alerts::RecentAlerts;

mod stress_indicator;
pub use stress_indicator::StressIndicator;

mod stress_trend;
pub use stress_trend::{average_stress, StressTrend};

mod sensor_distribution;
pub use sensor_distribution::{distribution_shares, SensorDistribution};

mod motion_chart;
pub use motion_chart::MotionChart;

mod live_feed_grid;
pub use live_feed_grid::LiveFeedGrid;

mod navbar;
pub use navbar::Navbar;
