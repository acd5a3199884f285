use serde::{Deserialize, Serialize};

/// Team record as returned by `GET /users/{user_id}/teams`.
#[derive(Debug, Deserialize)]
pub struct TeamRecord {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Team {
    pub name: String,
    pub id: String,
    /// Non-direct-message channels only. Zero until counted.
    pub channel_count: u32,
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Self {
            name: record.display_name,
            id: record.id,
            channel_count: 0,
        }
    }
}
