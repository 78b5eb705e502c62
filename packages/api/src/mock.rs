//! # Static fallback data
//!
//! The values the UI substitutes when a remote call fails, so the dashboard
//! never renders an empty or error state. Content mirrors what the backend
//! serves in its demo configuration; the trend and motion series are
//! deterministic here (a fixed pseudo-random sequence) so that fallback
//! renders — and tests asserting fallback equality — are reproducible.

use crate::models::{
    Alert, DashboardSettings, FeedStatus, LiveFeed, MotionPoint, Priority, PriorityColor,
    ResolvedIncident, SensorContributions, StressIndex, SummaryStats, TrendPoint,
};

/// Deterministic stand-in for a uniform sample in `0.0..1.0`.
fn pseudo(i: u32) -> f64 {
    f64::from((i * 37 + 11) % 100) / 100.0
}

pub fn summary_stats() -> SummaryStats {
    SummaryStats {
        active_cameras: 128,
        alerts_24h: 16,
        resolved_incidents: 42,
        system_status: "Operational".to_string(),
    }
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            icon: "person".to_string(),
            title: "Unauthorized Person Detected".to_string(),
            location: "CAM_12 - Entrance Hall".to_string(),
            priority: Priority::High,
            time: "2 min ago".to_string(),
            priority_color: PriorityColor::Red,
            description: Some(
                "This alert was triggered by the AI surveillance system based on multi-sensor fusion analysis."
                    .to_string(),
            ),
        },
        Alert {
            id: "2".to_string(),
            icon: "no_photography".to_string(),
            title: "Camera Obstructed".to_string(),
            location: "CAM_08 - Parking Lot".to_string(),
            priority: Priority::Medium,
            time: "15 min ago".to_string(),
            priority_color: PriorityColor::Yellow,
            description: Some("Camera obstruction detected in parking lot area.".to_string()),
        },
        Alert {
            id: "3".to_string(),
            icon: "directions_run".to_string(),
            title: "Suspicious Activity Detected".to_string(),
            location: "CAM_03 - Perimeter".to_string(),
            priority: Priority::High,
            time: "28 min ago".to_string(),
            priority_color: PriorityColor::Red,
            description: Some("Unusual movement patterns detected at perimeter.".to_string()),
        },
    ]
}

pub fn stress_index() -> StressIndex {
    let trend = (0..24)
        .map(|i| TrendPoint {
            time: format!("{i}:00"),
            stress: pseudo(i) * 0.4 + 0.3 + (f64::from(i) / 3.0).sin() * 0.2,
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

pub fn motion_data() -> Vec<MotionPoint> {
    (0..12)
        .map(|i| MotionPoint {
            time: format!("{}:00", i * 2),
            motion: pseudo(i) * 100.0,
        })
        .collect()
}

pub fn live_feeds() -> Vec<LiveFeed> {
    [
        ("1", "CAM_01", "Main Entrance"),
        ("2", "CAM_02", "Parking Lot"),
        ("3", "CAM_03", "Perimeter"),
        ("4", "CAM_04", "Building A"),
    ]
    .into_iter()
    .map(|(id, name, location)| LiveFeed {
        id: id.to_string(),
        name: name.to_string(),
        status: FeedStatus::Active,
        location: location.to_string(),
    })
    .collect()
}

pub fn resolved_incidents() -> Vec<ResolvedIncident> {
    let rows: [(&str, &str, &str, Priority, &str, &str, &str, &str); 6] = [
        (
            "INC_001",
            "Unauthorized Access Attempt",
            "CAM_05 - Main Entrance",
            Priority::High,
            "2024-01-15 14:30",
            "Security Team",
            "Unauthorized person detected at main entrance. Incident resolved after security verification.",
            "2024-01-15 14:15",
        ),
        (
            "INC_002",
            "Camera Malfunction",
            "CAM_08 - Parking Lot",
            Priority::Medium,
            "2024-01-15 13:45",
            "Technical Team",
            "Camera obstruction detected. Camera cleaned and repositioned.",
            "2024-01-15 13:20",
        ),
        (
            "INC_003",
            "Suspicious Activity",
            "CAM_03 - Perimeter",
            Priority::High,
            "2024-01-15 12:00",
            "Security Team",
            "Unusual movement patterns detected. Verified as authorized maintenance personnel.",
            "2024-01-15 11:45",
        ),
        (
            "INC_004",
            "High Stress Index",
            "CAM_07 - Lobby Area",
            Priority::Medium,
            "2024-01-15 10:30",
            "System Auto-Resolve",
            "Environmental stress index exceeded threshold. Returned to normal levels.",
            "2024-01-15 10:15",
        ),
        (
            "INC_005",
            "Audio Anomaly",
            "CAM_09 - Conference Hall",
            Priority::Low,
            "2024-01-15 09:00",
            "System Auto-Resolve",
            "Unusual audio frequency patterns detected. Confirmed as normal conference activity.",
            "2024-01-15 08:45",
        ),
        (
            "INC_006",
            "Motion Detection Anomaly",
            "CAM_12 - Storage Room",
            Priority::High,
            "2024-01-14 18:30",
            "Security Team",
            "Unexpected motion detected during off-hours. Verified as scheduled maintenance.",
            "2024-01-14 18:15",
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, location, priority, resolved_at, resolved_by, description, original)| {
                ResolvedIncident {
                    id: id.to_string(),
                    title: title.to_string(),
                    location: location.to_string(),
                    priority,
                    resolved_at: resolved_at.to_string(),
                    resolved_by: resolved_by.to_string(),
                    description: description.to_string(),
                    status: "resolved".to_string(),
                    original_alert_time: original.to_string(),
                }
            },
        )
        .collect()
}

pub fn settings() -> DashboardSettings {
    DashboardSettings::default()
}
