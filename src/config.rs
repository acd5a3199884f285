//! Merges command-line flags with `MM_*` environment variables.
//!
//! The command line always wins. Empty values count as absent so that an
//! exported-but-blank variable does not mask a default.

use crate::cli::Cli;
use crate::output::formatter::OutputFormat;
use reqwest::Url;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PORT: &str = "8065";
pub const DEFAULT_SCHEME: &str = "http";

pub const ENV_URL: &str = "MM_URL";
pub const ENV_PORT: &str = "MM_PORT";
pub const ENV_SCHEME: &str = "MM_SCHEME";
pub const ENV_TOKEN: &str = "MM_TOKEN";
pub const ENV_USER: &str = "MM_USER";
pub const ENV_DEBUG: &str = "MM_DEBUG";

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolve a string setting: command line, then environment, then `default`.
pub fn string_setting(
    cli: Option<&str>,
    env: &impl EnvSource,
    key: &str,
    default: Option<&str>,
) -> Option<String> {
    non_empty(cli.map(str::to_string))
        .or_else(|| non_empty(env.var(key)))
        .or_else(|| default.map(str::to_string))
}

/// Resolve a boolean setting. A flag given on the command line is always
/// `true`; otherwise the environment value is parsed, falling back to
/// `default` when absent or unparseable.
pub fn bool_setting(cli: bool, env: &impl EnvSource, key: &str, default: bool) -> bool {
    if cli {
        return true;
    }

    match env.var(key).map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Everything needed to reach the Mattermost API.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub scheme: String,
    pub token: String,
}

impl ConnectionConfig {
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("token", &mask(&self.token))
            .finish()
    }
}

fn mask(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetting {
    Url,
    Scheme,
    Token,
    Username,
}

impl MissingSetting {
    pub fn name(&self) -> &'static str {
        match self {
            MissingSetting::Url => "url",
            MissingSetting::Scheme => "scheme",
            MissingSetting::Token => "token",
            MissingSetting::Username => "user",
        }
    }

    pub fn guidance(&self) -> String {
        match self {
            MissingSetting::Url => format!(
                "The Mattermost URL must be supplied either on the command line (--url) or via the {} environment variable",
                ENV_URL
            ),
            MissingSetting::Scheme => format!(
                "The Mattermost HTTP scheme must be supplied either on the command line (--scheme) or via the {} environment variable",
                ENV_SCHEME
            ),
            MissingSetting::Token => format!(
                "The Mattermost auth token must be supplied either on the command line (--token) or via the {} environment variable",
                ENV_TOKEN
            ),
            MissingSetting::Username => format!(
                "A Mattermost username is required, either on the command line (--user) or via the {} environment variable",
                ENV_USER
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", names(.0))]
    Missing(Vec<MissingSetting>),

    #[error("invalid {setting} '{value}'")]
    Invalid {
        setting: &'static str,
        value: String,
        guidance: String,
    },
}

impl ConfigError {
    /// One line of advice per problem, for the user.
    pub fn guidance(&self) -> Vec<String> {
        match self {
            ConfigError::Missing(missing) => missing.iter().map(MissingSetting::guidance).collect(),
            ConfigError::Invalid {
                value, guidance, ..
            } => vec![format!("{} (got '{}')", guidance, value)],
        }
    }
}

fn names(missing: &[MissingSetting]) -> String {
    missing
        .iter()
        .map(MissingSetting::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fully resolved program settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub username: String,
    pub format: OutputFormat,
    pub no_color: bool,
}

impl Settings {
    /// The debug toggle on its own, so logging can start before validation.
    pub fn debug_enabled(cli: &Cli, env: &impl EnvSource) -> bool {
        bool_setting(cli.debug, env, ENV_DEBUG, false)
    }

    pub fn resolve(cli: &Cli, env: &impl EnvSource) -> Result<Settings, ConfigError> {
        let host = string_setting(cli.url.as_deref(), env, ENV_URL, None);
        let port = string_setting(cli.port.as_deref(), env, ENV_PORT, Some(DEFAULT_PORT));
        let scheme = string_setting(cli.scheme.as_deref(), env, ENV_SCHEME, Some(DEFAULT_SCHEME));
        let token = string_setting(cli.token.as_deref(), env, ENV_TOKEN, None);
        let username = string_setting(cli.user.as_deref(), env, ENV_USER, None);

        let mut missing = Vec::new();
        if host.is_none() {
            missing.push(MissingSetting::Url);
        }
        if scheme.is_none() {
            missing.push(MissingSetting::Scheme);
        }
        if token.is_none() {
            missing.push(MissingSetting::Token);
        }
        if username.is_none() {
            missing.push(MissingSetting::Username);
        }

        let (host, port, scheme, token, username) = match (host, port, scheme, token, username) {
            (Some(host), Some(port), Some(scheme), Some(token), Some(username)) => {
                (host, port, scheme, token, username)
            }
            _ => return Err(ConfigError::Missing(missing)),
        };

        let connection = ConnectionConfig {
            host,
            port: parse_port(&port)?,
            scheme: parse_scheme(&scheme)?,
            token,
        };
        check_address(&connection)?;

        Ok(Settings {
            connection,
            username,
            format: cli.format,
            no_color: cli.no_color,
        })
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::Invalid {
            setting: "port",
            value: value.to_string(),
            guidance: format!(
                "The Mattermost port must be a number between 1 and 65535, supplied either on the command line (--port) or via the {} environment variable",
                ENV_PORT
            ),
        })
}

fn parse_scheme(value: &str) -> Result<String, ConfigError> {
    let scheme = value.to_ascii_lowercase();
    if scheme == "http" || scheme == "https" {
        Ok(scheme)
    } else {
        Err(ConfigError::Invalid {
            setting: "scheme",
            value: value.to_string(),
            guidance: format!(
                "The Mattermost HTTP scheme must be http or https, supplied either on the command line (--scheme) or via the {} environment variable",
                ENV_SCHEME
            ),
        })
    }
}

/// The host must form a plain `scheme://host:port` address with no path.
fn check_address(connection: &ConnectionConfig) -> Result<(), ConfigError> {
    match Url::parse(&connection.base_url()) {
        Ok(url) if url.path() == "/" && url.query().is_none() && url.fragment().is_none() => Ok(()),
        _ => Err(ConfigError::Invalid {
            setting: "url",
            value: connection.host.clone(),
            guidance: format!(
                "The Mattermost URL must be a host name without the HTTP scheme, port or path, supplied either on the command line (--url) or via the {} environment variable",
                ENV_URL
            ),
        }),
    }
}
