use super::client::MattermostClient;
use super::error::{ApiOperation, ResolveError};
use crate::models::user::{User, UserRecord};
use log::{debug, error};

/// Look up a user by username. The returned user has no teams attached.
pub async fn resolve_user(client: &MattermostClient, username: &str) -> Result<User, ResolveError> {
    debug!("Getting user ID for user: {}", username);

    let record: UserRecord = client
        .get(ApiOperation::GetUserByUsername, &["users", "username", username], &[])
        .await
        .map_err(|e| {
            error!("Failed to retrieve user: {}", e);
            ResolveError::User(e)
        })?;

    Ok(User::from_record(username, record))
}
