use serde::{Deserialize, Serialize};

use super::Priority;

/// A closed-out alert from `GET /api/incidents/resolved`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIncident {
    pub id: String,
    pub title: String,
    pub location: String,
    pub priority: Priority,
    pub resolved_at: String,
    pub resolved_by: String,
    pub description: String,
    /// Always `"resolved"` on the wire.
    pub status: String,
    pub original_alert_time: String,
}
