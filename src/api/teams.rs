use super::client::MattermostClient;
use super::error::{ApiOperation, ResolveError};
use crate::models::team::{Team, TeamRecord};
use log::{debug, error};

/// Teams the user belongs to, in the order the server returns them, with
/// channel counts still at zero.
pub async fn resolve_teams_for_user(
    client: &MattermostClient,
    user_id: &str,
) -> Result<Vec<Team>, ResolveError> {
    debug!("Getting teams for user ID: {}", user_id);

    let records: Vec<TeamRecord> = client
        .get(ApiOperation::GetTeamsForUser, &["users", user_id, "teams"], &[])
        .await
        .map_err(|e| {
            error!("Failed to retrieve teams: {}", e);
            ResolveError::Teams(e)
        })?;

    Ok(records.into_iter().map(Team::from).collect())
}
