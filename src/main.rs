mod action;
mod config;
mod dispatcher;
mod error;
mod launcher;
mod sway_client;
mod workspace_state;

use anyhow::{Context, Result};
use config::Config;
use dispatcher::{Dispatcher, Invocation};
use launcher::RofiLauncher;
use sway_client::{DryRunClient, RealSwayClient, SwayClient};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Parse CLI arguments
    let config = Config::parse();

    // Initialize logging on stderr so launcher output and stdout stay separate
    let log_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Reject bad arguments before talking to the window manager
    let invocation = Invocation::new(&config.action, config.destination.clone())?;
    debug!("Invocation: {:?}", invocation);

    let connection =
        RealSwayClient::new().context("Failed to connect to the window manager")?;
    let client: Box<dyn SwayClient> = if config.dry_run {
        info!("Dry run: commands will be logged, not sent");
        Box::new(DryRunClient::new(connection))
    } else {
        Box::new(connection)
    };

    let launcher = RofiLauncher::new(config.launcher.clone());
    let mut dispatcher = Dispatcher::new(client, launcher);
    dispatcher
        .run(invocation)
        .with_context(|| format!("Action '{}' failed", config.action))?;

    Ok(())
}
