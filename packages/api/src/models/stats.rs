use serde::{Deserialize, Serialize};

/// Headline counters from `GET /api/summary-stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub active_cameras: u32,
    pub alerts_24h: u32,
    pub resolved_incidents: u32,
    pub system_status: String,
}

/// One point of the stress trend series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub time: String,
    pub stress: f64,
}

/// Per-sensor-class contribution to the stress index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorContributions {
    pub video: f64,
    pub audio: f64,
    pub iot: f64,
}

/// The backend-computed environmental stress index (0–1 scalar), opaque to
/// this layer beyond its shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressIndex {
    pub current: f64,
    pub status: String,
    #[serde(rename = "change1h")]
    pub change_1h: f64,
    pub trend: Vec<TrendPoint>,
    pub sensor_contributions: SensorContributions,
}

/// One bar of the motion activity chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionPoint {
    pub time: String,
    pub motion: f64,
}
