use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod client;
mod config;
mod output;

#[cfg(test)]
mod test_utils;

use cli::Cli;

/// Main entry point for the InsightDash command line client.
#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let env_file = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "insightdash=info,charts=info,common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    cli.run().await
}
