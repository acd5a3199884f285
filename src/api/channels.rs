use super::client::MattermostClient;
use super::error::{ApiOperation, ResolveError};
use crate::models::channel::ChannelRecord;
use log::{debug, error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelCounts {
    /// Every channel that is not a direct message.
    pub channels: u32,
    /// Direct-message channels; always 0 unless they were asked for.
    pub direct_messages: u32,
}

/// Split channels into ordinary and direct-message counts.
///
/// Direct messages belong to the user rather than the team, so the server
/// returns the same set for every team. Callers pass
/// `include_direct_messages = true` for exactly one team.
pub fn tally_channels(channels: &[ChannelRecord], include_direct_messages: bool) -> ChannelCounts {
    channels
        .iter()
        .fold(ChannelCounts::default(), |mut counts, channel| {
            if channel.channel_type.is_direct() {
                if include_direct_messages {
                    counts.direct_messages += 1;
                }
            } else {
                counts.channels += 1;
            }
            counts
        })
}

/// Count the unarchived channels `user_id` can see in `team_id`.
pub async fn resolve_channel_counts(
    client: &MattermostClient,
    team_id: &str,
    user_id: &str,
    include_direct_messages: bool,
) -> Result<ChannelCounts, ResolveError> {
    debug!("Getting channel count for team ID: {}", team_id);

    let query = vec![("include_deleted", "false".to_string())];
    let channels: Vec<ChannelRecord> = client
        .get(
            ApiOperation::GetChannelsForTeamForUser,
            &["users", user_id, "teams", team_id, "channels"],
            &query,
        )
        .await
        .map_err(|e| {
            error!("Failed to retrieve channels: {}", e);
            ResolveError::Channels {
                team_id: team_id.to_string(),
                source: e,
            }
        })?;

    Ok(tally_channels(&channels, include_direct_messages))
}
