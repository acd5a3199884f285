use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// The remote operations this tool performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    GetUserByUsername,
    GetTeamsForUser,
    GetChannelsForTeamForUser,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOperation::GetUserByUsername => "GetUserByUsername",
            ApiOperation::GetTeamsForUser => "GetTeamsForUser",
            ApiOperation::GetChannelsForTeamForUser => "GetChannelsForTeamForUser",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: ApiOperation,
        source: reqwest::Error,
    },

    #[error("{operation} returned bad HTTP response {status}{}", detail(.message))]
    Status {
        operation: ApiOperation,
        status: StatusCode,
        message: Option<String>,
    },

    #[error("{operation} returned an unreadable response: {source}")]
    Decode {
        operation: ApiOperation,
        source: serde_json::Error,
    },
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(": {}", message),
        _ => String::new(),
    }
}

impl ApiError {
    pub fn operation(&self) -> ApiOperation {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Status { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }
}

/// Failure to turn an API response into a domain value.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("user lookup failed: {0}")]
    User(#[source] ApiError),

    #[error("team lookup failed: {0}")]
    Teams(#[source] ApiError),

    #[error("channel lookup failed for team {team_id}: {source}")]
    Channels { team_id: String, source: ApiError },
}

impl ResolveError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            ResolveError::User(source)
            | ResolveError::Teams(source)
            | ResolveError::Channels { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            operation: ApiOperation::GetTeamsForUser,
            status: StatusCode::FORBIDDEN,
            message: Some("You do not have the appropriate permissions.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "GetTeamsForUser returned bad HTTP response 403 Forbidden: You do not have the appropriate permissions."
        );
    }

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::User(ApiError::Status {
            operation: ApiOperation::GetUserByUsername,
            status: StatusCode::NOT_FOUND,
            message: None,
        });
        assert_eq!(
            err.to_string(),
            "user lookup failed: GetUserByUsername returned bad HTTP response 404 Not Found"
        );
        assert_eq!(err.api_error().operation(), ApiOperation::GetUserByUsername);
    }
}
