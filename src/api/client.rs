use super::error::{ApiError, ApiOperation};
use crate::config::ConnectionConfig;
use anyhow::{Context, Result};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const API_PATH: [&str; 2] = ["api", "v4"];

/// Error document the server sends with non-200 responses.
#[derive(Debug, Deserialize)]
struct PlatformErrorResponse {
    #[serde(default)]
    message: String,
}

pub struct MattermostClient {
    client: reqwest::Client,
    base_url: Url,
}

impl MattermostClient {
    pub fn new(connection: &ConnectionConfig) -> Result<Self> {
        Self::with_base_url(&connection.base_url(), &connection.token)
    }

    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid Mattermost address: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid Mattermost address: {}", base_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Auth token contains characters not allowed in an HTTP header")?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Full URL for an API path given as individual segments. Segments are
    /// percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PATH).extend(segments);
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments);
        debug!("→ GET {} ({})", url, operation);

        let start = std::time::Instant::now();
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        debug!(
            "← {} ({}ms, {} bytes)",
            status.as_u16(),
            start.elapsed().as_millis(),
            body.len()
        );

        classify_response(operation, status, &body)
    }
}

/// The one success rule shared by every operation: HTTP 200 with a body that
/// decodes as `T`. Anything else is an error tagged with `operation`.
pub fn classify_response<T: DeserializeOwned>(
    operation: ApiOperation,
    status: StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    if status != StatusCode::OK {
        let message = serde_json::from_str::<PlatformErrorResponse>(body)
            .ok()
            .map(|e| e.message);
        return Err(ApiError::Status {
            operation,
            status,
            message,
        });
    }

    serde_json::from_str(body).map_err(|source| ApiError::Decode { operation, source })
}
