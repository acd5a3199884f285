use super::team::Team;
use serde::{Deserialize, Serialize};

/// User record as returned by `GET /users/username/{username}`.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
}

/// The user being reported on, with the teams they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub teams: Vec<Team>,
}

impl User {
    /// Build a user from the raw record. The team list starts out empty.
    pub fn from_record(username: &str, record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: username.to_string(),
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            nickname: record.nickname,
            teams: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
