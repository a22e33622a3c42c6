use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telesend::{Config, TelesendClient};

#[derive(Parser, Debug)]
#[command(name = "telesend")]
#[command(about = "Send a text message to the configured Telegram chat", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Message text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,telesend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let text = cli.text.join(" ");

    info!("Loading configuration from: {}", cli.config.display());
    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let client = TelesendClient::from_config(&config.telegram)
        .context("Failed to build Telegram client")?;

    let chat_id = client
        .chat_id()
        .map(|id| id.to_string())
        .context("telegram.chat_id is not set in the config")?;

    match client.send(&text).await {
        Ok(()) => {
            info!("Message sent to chat {}", chat_id);
            Ok(())
        }
        Err(e) => {
            error!("Failed to send message to chat {}: {}", chat_id, e);
            Err(e).context("sendMessage failed")
        }
    }
}
