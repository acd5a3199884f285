use crate::output::formatter::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mm-channel-count")]
#[command(about = "Find how many Mattermost channels a user is a member of", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The URL of the Mattermost instance, without the HTTP scheme [env: MM_URL]
    #[arg(long)]
    pub url: Option<String>,

    /// The TCP port used by Mattermost [env: MM_PORT] [default: 8065]
    #[arg(long)]
    pub port: Option<String>,

    /// The HTTP scheme to be used (http/https) [env: MM_SCHEME] [default: http]
    #[arg(long)]
    pub scheme: Option<String>,

    /// The auth token used to connect to Mattermost [env: MM_TOKEN]
    #[arg(long)]
    pub token: Option<String>,

    /// The username of the Mattermost user [env: MM_USER]
    #[arg(long)]
    pub user: Option<String>,

    /// Enable debug output [env: MM_DEBUG]
    #[arg(long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colorized output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mm-channel-count"]);
        assert!(cli.url.is_none());
        assert!(!cli.debug);
        assert!(!cli.no_color);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["mm-channel-count", "--format", "yaml"]);
        assert_eq!(cli.format, OutputFormat::Yaml);
    }
}
