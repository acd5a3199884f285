use serde::Deserialize;

/// Channel record as returned by `GET /users/{user_id}/teams/{team_id}/channels`.
/// Only the type marker is needed for counting; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChannelRecord {
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ChannelType {
    Open,
    Private,
    Group,
    Direct,
    Other(String),
}

impl From<String> for ChannelType {
    fn from(marker: String) -> Self {
        match marker.as_str() {
            "O" => ChannelType::Open,
            "P" => ChannelType::Private,
            "G" => ChannelType::Group,
            "D" => ChannelType::Direct,
            _ => ChannelType::Other(marker),
        }
    }
}

impl ChannelType {
    pub fn is_direct(&self) -> bool {
        matches!(self, ChannelType::Direct)
    }
}
