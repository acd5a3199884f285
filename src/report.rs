//! Builds a [`ChannelReport`] for one user: user, then teams, then channel
//! counts team by team.

use crate::api::channels::resolve_channel_counts;
use crate::api::teams::resolve_teams_for_user;
use crate::api::users::resolve_user;
use crate::api::{MattermostClient, ResolveError};
use crate::models::user::User;
use log::warn;
use thiserror::Error;

pub const EXIT_CONFIG: i32 = 1;
pub const EXIT_USER_LOOKUP: i32 = 10;
pub const EXIT_TEAM_LOOKUP: i32 = 11;

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReport {
    pub user: User,
    /// Direct-message channels, counted once for the whole run.
    pub direct_messages: u32,
}

impl ChannelReport {
    pub fn total_channels(&self) -> u32 {
        self.user
            .teams
            .iter()
            .map(|team| team.channel_count)
            .sum::<u32>()
            + self.direct_messages
    }
}

/// Failures that leave nothing to report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to retrieve user from Mattermost")]
    UserLookup(#[source] ResolveError),

    #[error("Failed to retrieve teams from Mattermost")]
    TeamLookup(#[source] ResolveError),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::UserLookup(_) => EXIT_USER_LOOKUP,
            RunError::TeamLookup(_) => EXIT_TEAM_LOOKUP,
        }
    }
}

/// Requests are issued one at a time. A team whose channels cannot be
/// listed is logged and left at zero; the run carries on.
pub async fn run(client: &MattermostClient, username: &str) -> Result<ChannelReport, RunError> {
    let mut user = resolve_user(client, username)
        .await
        .map_err(RunError::UserLookup)?;

    user.teams = resolve_teams_for_user(client, &user.id)
        .await
        .map_err(RunError::TeamLookup)?;

    let mut direct_messages = 0;
    for (index, team) in user.teams.iter_mut().enumerate() {
        // Direct messages are the same for every team, so only the first
        // team's are counted.
        let first = index == 0;

        match resolve_channel_counts(client, &team.id, &user.id, first).await {
            Ok(counts) => {
                if first {
                    direct_messages = counts.direct_messages;
                }
                team.channel_count = counts.channels;
            }
            Err(_) => {
                warn!("Failed to get channel count for team {}", team.name);
            }
        }
    }

    Ok(ChannelReport {
        user,
        direct_messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::Team;
    use mockito::Matcher;

    async fn setup() -> (mockito::ServerGuard, MattermostClient) {
        let server = mockito::Server::new_async().await;
        let client = MattermostClient::with_base_url(&server.url(), "test-token").unwrap();
        (server, client)
    }

    async fn mock_user(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("GET", "/api/v4/users/username/jdoe")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": "u1", "username": "jdoe", "email": "jdoe@example.com",
                    "first_name": "Jane", "last_name": "Doe", "nickname": "JD"}"#,
            )
            .create_async()
            .await
    }

    async fn mock_teams(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("GET", "/api/v4/users/u1/teams")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    async fn mock_channels(
        server: &mut mockito::ServerGuard,
        team_id: &str,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        server
            .mock("GET", format!("/api/v4/users/u1/teams/{}/channels", team_id).as_str())
            .match_query(Matcher::UrlEncoded("include_deleted".into(), "false".into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    fn channels(open: usize, direct: usize) -> String {
        let records: Vec<String> = (0..open)
            .map(|i| format!(r#"{{"id": "o{}", "type": "O"}}"#, i))
            .chain((0..direct).map(|i| format!(r#"{{"id": "d{}", "type": "D"}}"#, i)))
            .collect();
        format!("[{}]", records.join(","))
    }

    #[tokio::test]
    async fn test_run_counts_each_team_and_direct_messages_once() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = mock_teams(
            &mut server,
            r#"[{"id": "t1", "display_name": "General"}, {"id": "t2", "display_name": "Ops"}]"#,
        )
        .await;
        let _general = mock_channels(&mut server, "t1", 200, &channels(5, 2)).await;
        let _ops = mock_channels(&mut server, "t2", 200, &channels(3, 2)).await;

        let report = run(&client, "jdoe").await.unwrap();

        assert_eq!(report.user.username, "jdoe");
        assert_eq!(report.user.teams[0].channel_count, 5);
        assert_eq!(report.user.teams[1].channel_count, 3);
        assert_eq!(report.direct_messages, 2);
        assert_eq!(report.total_channels(), 10);
    }

    #[tokio::test]
    async fn test_run_takes_direct_messages_from_first_team_only() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = mock_teams(
            &mut server,
            r#"[{"id": "t2", "display_name": "Ops"}, {"id": "t1", "display_name": "General"}]"#,
        )
        .await;
        // The second team reports a different number of DMs; it must be ignored.
        let _ops = mock_channels(&mut server, "t2", 200, &channels(1, 4)).await;
        let _general = mock_channels(&mut server, "t1", 200, &channels(2, 9)).await;

        let report = run(&client, "jdoe").await.unwrap();
        assert_eq!(report.direct_messages, 4);
        assert_eq!(report.total_channels(), 1 + 2 + 4);
    }

    #[tokio::test]
    async fn test_run_team_failure_is_not_fatal() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = mock_teams(
            &mut server,
            r#"[{"id": "t1", "display_name": "General"}, {"id": "t2", "display_name": "Ops"}]"#,
        )
        .await;
        let _general = mock_channels(&mut server, "t1", 200, &channels(5, 2)).await;
        let _ops = mock_channels(
            &mut server,
            "t2",
            403,
            r#"{"id": "api.context.permissions.app_error", "message": "Forbidden", "status_code": 403}"#,
        )
        .await;

        let report = run(&client, "jdoe").await.unwrap();
        assert_eq!(
            report.user.teams,
            vec![
                Team {
                    name: "General".to_string(),
                    id: "t1".to_string(),
                    channel_count: 5
                },
                Team {
                    name: "Ops".to_string(),
                    id: "t2".to_string(),
                    channel_count: 0
                },
            ]
        );
        assert_eq!(report.total_channels(), 7);
    }

    #[tokio::test]
    async fn test_run_first_team_failure_leaves_direct_messages_at_zero() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = mock_teams(
            &mut server,
            r#"[{"id": "t1", "display_name": "General"}, {"id": "t2", "display_name": "Ops"}]"#,
        )
        .await;
        let _general = mock_channels(&mut server, "t1", 500, "").await;
        let _ops = mock_channels(&mut server, "t2", 200, &channels(3, 6)).await;

        let report = run(&client, "jdoe").await.unwrap();
        assert_eq!(report.direct_messages, 0);
        assert_eq!(report.user.teams[0].channel_count, 0);
        assert_eq!(report.user.teams[1].channel_count, 3);
    }

    #[tokio::test]
    async fn test_run_user_lookup_failure() {
        let (mut server, client) = setup().await;
        let _user = server
            .mock("GET", "/api/v4/users/username/jdoe")
            .with_status(403)
            .with_body("")
            .create_async()
            .await;

        let err = run(&client, "jdoe").await.unwrap_err();
        assert!(matches!(err, RunError::UserLookup(_)));
        assert_eq!(err.exit_code(), EXIT_USER_LOOKUP);
    }

    #[tokio::test]
    async fn test_run_team_lookup_failure() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = server
            .mock("GET", "/api/v4/users/u1/teams")
            .with_status(401)
            .with_body(r#"{"id": "api.context.session_expired.app_error", "message": "Invalid or expired session", "status_code": 401}"#)
            .create_async()
            .await;

        let err = run(&client, "jdoe").await.unwrap_err();
        assert!(matches!(err, RunError::TeamLookup(_)));
        assert_eq!(err.exit_code(), EXIT_TEAM_LOOKUP);
    }

    #[tokio::test]
    async fn test_run_user_without_teams() {
        let (mut server, client) = setup().await;
        let _user = mock_user(&mut server).await;
        let _teams = mock_teams(&mut server, "[]").await;

        let report = run(&client, "jdoe").await.unwrap();
        assert!(report.user.teams.is_empty());
        assert_eq!(report.total_channels(), 0);
    }
}
