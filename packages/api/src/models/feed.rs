use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Active,
    Inactive,
}

/// A camera feed from `GET /api/live-feeds`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveFeed {
    pub id: String,
    pub name: String,
    pub status: FeedStatus,
    pub location: String,
}
