use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::{ChartKind, DEFAULT_DURATION, DEFAULT_METRIC, DEFAULT_PRODUCT, ForecastHorizon};
use tracing::info;

pub mod commands;

use commands::{ChartOutcome, ForecastOutcome, chart, forecast};

use crate::client::BackendClient;
use crate::config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "insightdash")]
#[command(about = "Turn natural-language questions into charts and forecast product performance")]
#[command(version)]
pub struct Cli {
    /// Base url of the query and forecast backend
    #[arg(long, global = true, env = "INSIGHTDASH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait for a backend answer
    #[arg(long, global = true, env = "INSIGHTDASH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Comma-separated series colors, e.g. "#6366F1,#22D3EE"
    #[arg(long, global = true, env = "INSIGHTDASH_PALETTE")]
    pub palette: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the query backend for a chart
    ///
    /// Examples:
    ///   insightdash chart --query "Total profit by country in 2014"
    ///   insightdash chart --query "Units sold by segment" --kind pie
    Chart {
        /// Question in plain language
        #[arg(short, long)]
        query: String,

        /// bar, line, area or pie
        #[arg(short, long, default_value_t = ChartKind::Bar)]
        kind: ChartKind,

        /// Where to write the HTML page
        #[arg(short, long, default_value = "chart.html")]
        out: PathBuf,
    },
    /// Forecast a product metric
    ///
    /// Durations are given as "<n> months", "<n> quarters" or "<n> years".
    Forecast {
        #[arg(short, long, default_value = DEFAULT_PRODUCT)]
        product: String,

        #[arg(short, long, default_value = DEFAULT_METRIC)]
        metric: String,

        #[arg(short, long, default_value = DEFAULT_DURATION)]
        duration: ForecastHorizon,

        /// Where to write the HTML page
        #[arg(short, long, default_value = "forecast.html")]
        out: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = ClientConfig::new(&self.api_url, self.timeout_secs, self.palette.as_deref())?;
        let client = BackendClient::new(config)?;

        match self.command {
            Commands::Chart { query, kind, out } => match chart(&client, &query, kind, &out).await? {
                ChartOutcome::Written { path, .. } => info!("Chart saved to {}", path.display()),
                ChartOutcome::Diagnostic(message) => println!("{}", message),
            },
            Commands::Forecast {
                product,
                metric,
                duration,
                out,
            } => match forecast(&client, &product, &metric, duration, &out).await? {
                ForecastOutcome::Written { path, insight } => {
                    info!("Forecast saved to {}", path.display());
                    println!("{}", insight);
                }
                ForecastOutcome::NoData { insight } => {
                    println!("No forecast data returned.");
                    if let Some(insight) = insight {
                        println!("{}", insight);
                    }
                }
            },
        }
        Ok(())
    }
}
