//! # Server-side demo data
//!
//! The dashboard backend serves demo content: fixed headline numbers,
//! a canned alert feed, and randomized trend/motion series. Sensors and
//! settings are the only mutable state and live in process memory behind
//! `OnceCell` singletons — there is no database in this system.

use tokio::sync::{Mutex, OnceCell};

use crate::mock;
use crate::models::{
    Alert, DashboardSettings, LiveFeed, MotionPoint, ResolvedIncident, Sensor, SensorContributions,
    SensorStatus, SensorType, StressIndex, SummaryStats, TrendPoint,
};

static SETTINGS: OnceCell<Mutex<DashboardSettings>> = OnceCell::const_new();
static SENSORS: OnceCell<Mutex<Vec<Sensor>>> = OnceCell::const_new();

pub fn summary_stats() -> SummaryStats {
    mock::summary_stats()
}

pub fn recent_alerts() -> Vec<Alert> {
    mock::alerts()
}

/// Stress index with a freshly sampled 24-hour trend.
pub fn stress_index() -> StressIndex {
    let trend = (0..24)
        .map(|i| TrendPoint {
            time: format!("{i}:00"),
            stress: rand::random::<f64>() * 0.4 + 0.3 + (f64::from(i) / 3.0).sin() * 0.2,
        })
        .collect();

    StressIndex {
        current: 0.68,
        status: "Moderate".to_string(),
        change_1h: 0.12,
        trend,
        sensor_contributions: SensorContributions {
            video: 0.45,
            audio: 0.38,
            iot: 0.52,
        },
    }
}

pub fn motion_chart() -> Vec<MotionPoint> {
    (0..12)
        .map(|i| MotionPoint {
            time: format!("{}:00", i * 2),
            motion: rand::random::<f64>() * 100.0,
        })
        .collect()
}

pub fn live_feeds() -> Vec<LiveFeed> {
    mock::live_feeds()
}

pub fn resolved_incidents() -> Vec<ResolvedIncident> {
    mock::resolved_incidents()
}

/// Current wall-clock label used for sensor `lastUpdate` fields.
pub fn now_label() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Get or initialize the in-process settings singleton.
pub async fn settings() -> &'static Mutex<DashboardSettings> {
    SETTINGS
        .get_or_init(|| async { Mutex::new(DashboardSettings::default()) })
        .await
}

/// Get or initialize the in-process sensor registry.
pub async fn sensors() -> &'static Mutex<Vec<Sensor>> {
    SENSORS
        .get_or_init(|| async { Mutex::new(seed_sensors()) })
        .await
}

fn seed_sensors() -> Vec<Sensor> {
    let rows: [(&str, &str, SensorType, &str, SensorStatus, f64); 4] = [
        (
            "SEN_001",
            "Entrance Camera",
            SensorType::Video,
            "Main Entrance",
            SensorStatus::Active,
            0.7,
        ),
        (
            "SEN_002",
            "Lobby Microphone",
            SensorType::Audio,
            "Lobby Area",
            SensorStatus::Active,
            0.5,
        ),
        (
            "SEN_003",
            "Perimeter Motion",
            SensorType::Iot,
            "Perimeter",
            SensorStatus::Warning,
            0.8,
        ),
        (
            "SEN_004",
            "Parking Camera",
            SensorType::Video,
            "Parking Lot",
            SensorStatus::Inactive,
            0.6,
        ),
    ];

    rows.into_iter()
        .map(|(id, name, sensor_type, location, status, sensitivity)| Sensor {
            id: id.to_string(),
            name: name.to_string(),
            sensor_type,
            location: location.to_string(),
            status,
            last_update: now_label(),
            sensitivity,
        })
        .collect()
}

/// Canned analysis response standing in for the external AI service.
pub fn analyze(kind: &str, content: &serde_json::Value) -> serde_json::Value {
    let item_count = content
        .as_array()
        .map(|items| items.len())
        .or_else(|| content.as_object().map(|map| map.len()))
        .unwrap_or(0);

    serde_json::json!({
        "type": kind,
        "summary": format!(
            "Analyzed {item_count} {kind} records. Activity levels are within expected bounds; \
             elevated motion was observed near the perimeter cameras."
        ),
        "riskLevel": "moderate",
        "recommendations": [
            "Review perimeter camera placement for blind spots.",
            "Confirm off-hours access schedules with the security team.",
        ],
        "generatedAt": chrono::Utc::now().to_rfc3339(),
    })
}
