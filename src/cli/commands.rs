//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, their arguments, and command execution.

use crate::config::Settings;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "redset")]
#[command(about = "Deployment settings provider for a Node-RED flow runtime")]
#[command(version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the resolved settings as JSON for the runtime to consume
    Render {
        /// Human-formatted output instead of compact JSON
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a human-readable summary of the resolved settings
    Show,
}

impl Cli {
    pub async fn execute(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Render { pretty, output } => render(settings, pretty, output).await,
            Commands::Show => show(settings),
        }
    }
}

async fn render(settings: Settings, pretty: bool, output: Option<PathBuf>) -> Result<()> {
    let rendered = if pretty {
        settings.to_json_pretty()?
    } else {
        settings.to_json()?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            tokio::fs::write(&path, rendered.as_bytes()).await?;
            info!("Settings written to {}", path.display());
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}

fn show(settings: Settings) -> Result<()> {
    print!("{}", summary(&settings));

    Ok(())
}

/// Human-readable summary printed by the `show` command.
///
/// Reports only whether the credential secret is present, never its value.
pub fn summary(settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(&format!("User directory:        {}\n", settings.user_dir));
    out.push_str(&format!(
        "Pretty flow file:      {}\n",
        settings.flow_file_pretty
    ));
    out.push_str(&format!(
        "Flow file containment: {}\n",
        settings.flow_file_containment
    ));
    out.push_str(&format!(
        "Console log level:     {}\n",
        settings.logging.console.level
    ));
    out.push_str(&format!(
        "Console metrics:       {}\n",
        settings.logging.console.metrics
    ));
    out.push_str(&format!(
        "Credential secret:     {}\n",
        if settings.has_credential_secret() {
            "set"
        } else {
            "not set"
        }
    ));
    out
}
