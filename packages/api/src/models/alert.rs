use serde::{Deserialize, Serialize};

/// Alert severity as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Accent color the backend pairs with a priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityColor {
    Red,
    Yellow,
}

/// A single alert from `GET /api/alerts/recent`.
///
/// Identity is `id`; ids are assumed unique within a fetch batch. `time` is
/// a display-only string ("2 min ago") — no ordering is derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub location: String,
    pub priority: Priority,
    pub time: String,
    pub priority_color: PriorityColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
