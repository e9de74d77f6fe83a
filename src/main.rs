//! redsettings - Flow Runtime Settings Provider
//!
//! Command-line tool that resolves the deployment settings for a Node-RED
//! flow runtime and renders them in the shape its configuration schema
//! expects.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;

use crate::cli::Cli;
use crate::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the command
    if let Err(e) = run(cli).await {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting redsettings");

    // Settings are resolved once, before anything consumes them
    let settings = config::load_settings();

    cli.execute(settings).await?;

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redsettings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
