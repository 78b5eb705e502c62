use serde::{Deserialize, Serialize};

/// System-wide dashboard settings, read and written as one object via
/// `GET /api/settings` and `POST /api/settings/save`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub system_name: String,
    /// Retention window in days, kept as a string for the form field.
    pub data_retention: String,
    pub alert_threshold: f64,
    pub auto_export: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub alert_email: String,
    pub alert_sms: String,
    pub low_threshold: f64,
    pub medium_threshold: f64,
    pub high_threshold: f64,
    pub critical_threshold: f64,
    /// Seconds between repeat alerts for the same source.
    pub alert_cooldown: u32,
    pub enable_sound_alerts: bool,
    pub enable_visual_alerts: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            system_name: "AI Surveillance System".to_string(),
            data_retention: "90".to_string(),
            alert_threshold: 0.7,
            auto_export: true,
            email_notifications: true,
            sms_notifications: false,
            push_notifications: true,
            alert_email: String::new(),
            alert_sms: String::new(),
            low_threshold: 0.3,
            medium_threshold: 0.6,
            high_threshold: 0.8,
            critical_threshold: 0.9,
            alert_cooldown: 300,
            enable_sound_alerts: true,
            enable_visual_alerts: true,
        }
    }
}
