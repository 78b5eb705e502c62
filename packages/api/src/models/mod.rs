//! # Wire models for the dashboard API
//!
//! Passive DTOs mirrored 1:1 from the REST contract. Everything here is
//! `Serialize + Deserialize + PartialEq` so it can cross the server/client
//! boundary via Dioxus server functions, and every wire field name is
//! camelCase to stay byte-compatible with the original backend.

mod alert;
mod feed;
mod incident;
mod sensor;
mod settings;
mod stats;
mod user;

pub use alert::{Alert, Priority, PriorityColor};
pub use feed::{FeedStatus, LiveFeed};
pub use incident::ResolvedIncident;
pub use sensor::{Sensor, SensorStatus, SensorType};
pub use settings::DashboardSettings;
pub use stats::{MotionPoint, SensorContributions, StressIndex, SummaryStats, TrendPoint};
pub use user::{AuthUser, ProviderUser};
