use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use podscout::adapters::{AppleAdapter, FeedsAdapter, SpotifyAdapter};
use podscout::aggregator::Aggregator;
use podscout::export;
use podscout_common::{Config, FetchQuery};

#[derive(Parser)]
#[command(
    name = "podscout",
    about = "Aggregate podcast episode and guest contact data from multiple sources"
)]
struct Cli {
    /// Search term or category to aggregate.
    query: String,

    /// Destination CSV file.
    #[arg(short, long, default_value = "podcast_guests.csv")]
    output: PathBuf,

    /// Per-source timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Optional overall deadline in seconds. On expiry, slower sources are
    /// reported as timeouts and the export proceeds with what resolved.
    #[arg(long)]
    deadline: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("podscout=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.log_redacted();

    let query = FetchQuery::new(cli.query.as_str())?;

    let mut aggregator = Aggregator::new(Duration::from_secs(cli.timeout));
    if let Some(secs) = cli.deadline {
        aggregator = aggregator.with_deadline(Duration::from_secs(secs));
    }

    aggregator.register(Box::new(AppleAdapter::new(config.result_limit)));
    match config.spotify_access_token.clone() {
        Some(token) => aggregator.register(Box::new(SpotifyAdapter::new(
            token,
            config.spotify_market.clone(),
            config.result_limit,
        ))),
        None => info!("Spotify adapter disabled (SPOTIFY_ACCESS_TOKEN not set)"),
    }
    aggregator.register(Box::new(FeedsAdapter::new()));

    let report = aggregator.run(&query).await;

    for failure in &report.failures {
        warn!("Source failed: {failure}");
    }

    export::export_csv(&report.records, &cli.output)?;
    info!(
        records = report.records.len(),
        failed_sources = report.failures.len(),
        path = %cli.output.display(),
        "Data saved"
    );

    Ok(())
}
