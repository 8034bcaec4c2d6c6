//! Onboard CLI - extract identity fields from client documents.

use anyhow::Context;
use clap::Parser;
use onboard_cli::commands;
use onboard_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter).await?;
        }
        Command::Preview(args) => {
            commands::execute_preview(args, &formatter).await?;
        }
        Command::Merge(args) => {
            commands::execute_merge(args, &formatter).await?;
        }
        Command::Chat(args) => {
            commands::execute_chat(args, &formatter).await?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, &formatter).await?;
        }
    }

    Ok(())
}
