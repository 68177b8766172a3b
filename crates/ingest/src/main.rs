use anyhow::Result;
use results_core::{PROJECT_NAME, PROJECT_VERSION};
use results_ingest::{
    aggregate, scrape_all, write_csv_file, AggregateError, HttpPageSource, ScrapeConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ScrapeConfig::from_env();
    tracing::info!(project = PROJECT_NAME, version = PROJECT_VERSION, "starting results scrape");
    tracing::info!(
        base_url = %config.base_url,
        state = %config.state_code,
        first_ac = config.first_ac,
        last_ac = config.last_ac,
        output = %config.output_csv.display(),
        "scrape settings"
    );

    let source = HttpPageSource::new(&config)?;
    let harvest = scrape_all(&source, &config).await;

    let rows = match aggregate(harvest.rows) {
        Ok(rows) => rows,
        Err(AggregateError::NoDataCollected) => {
            tracing::error!(
                fetch_failures = harvest.fetch_failures,
                pages_without_table = harvest.pages_without_table,
                "no data collected"
            );
            anyhow::bail!("no data collected from {}", config.base_url);
        }
    };

    let count = write_csv_file(&config.output_csv, &rows)?;
    tracing::info!(rows = count, path = %config.output_csv.display(), "rows collected");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
