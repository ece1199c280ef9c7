use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use talentdesk_client::app_log;
use talentdesk_client::cli::{handle_command, Cli};
use talentdesk_client::{ApiClients, EnvironmentConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(config: &EnvironmentConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EnvironmentConfig::load(cli.config.as_deref())?;
    init_logging(&config)?;

    app_log!(info, "Loaded configuration for environment: {}", config.environment);
    app_log!(info, "Main API: {}", config.api_url);
    app_log!(info, "AI service: {}", config.ai_url);
    app_log!(info, "Reviewer: {}", config.reviewer_url);

    let clients = ApiClients::from_config(&config).context("Failed to create HTTP clients")?;

    let output = handle_command(cli.command, &clients).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
