use anyhow::Context;
use clap::{CommandFactory, Parser};
use log::{debug, error, info};
use mm_channel_count::api::MattermostClient;
use mm_channel_count::cli::Cli;
use mm_channel_count::config::{ProcessEnv, Settings};
use mm_channel_count::logging;
use mm_channel_count::output::formatter;
use mm_channel_count::report::{self, EXIT_CONFIG};
use std::process;

/// Log `message` at ERROR and exit with `code`.
fn die(code: i32, message: &str) -> ! {
    error!("{}", message);
    process::exit(code);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(Settings::debug_enabled(&cli, &ProcessEnv));

    debug!("Validating parameters");
    let settings = match Settings::resolve(&cli, &ProcessEnv) {
        Ok(settings) => settings,
        Err(e) => {
            for line in e.guidance() {
                error!("{}", line);
            }
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            process::exit(EXIT_CONFIG);
        }
    };

    debug!(
        "Parameters: {:?}, user={}, format={:?}",
        settings.connection, settings.username, settings.format
    );

    let client = match MattermostClient::new(&settings.connection)
        .context("Failed to set up the Mattermost client")
    {
        Ok(client) => client,
        Err(e) => die(EXIT_CONFIG, &format!("{:#}", e)),
    };
    debug!("Full target for Mattermost: {}", settings.connection.base_url());

    info!("Processing started - Version: {}", env!("CARGO_PKG_VERSION"));

    let report = match report::run(&client, &settings.username).await {
        Ok(report) => report,
        Err(e) => die(e.exit_code(), &e.to_string()),
    };

    match formatter::render(&report, settings.format, settings.no_color) {
        Ok(output) => print!("{}", output),
        Err(e) => die(1, &format!("Failed to render the report: {:#}", e)),
    }
}
