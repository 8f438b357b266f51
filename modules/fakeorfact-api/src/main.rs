use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fakeorfact_collector::{start_collection_interval, Collector, SourceGroup};
use fakeorfact_common::{AppConfig, FileConfig};
use fakeorfact_sources::{FactCheckSource, FeedSource};
use fakeorfact_store::{ClaimStore, PgClaimStore};

#[derive(Parser)]
#[command(name = "fakeorfact", about = "Fact-check claim collector and read API")]
struct Cli {
    /// Path to config TOML file
    #[arg(long, default_value = "./config/fakeorfact.toml")]
    config: PathBuf,
}

/// One source group per configured identifier list. The fact-check API is
/// skipped when no key is set.
fn build_source_groups(config: &AppConfig, file_config: &FileConfig) -> Result<Vec<SourceGroup>> {
    let sources = &file_config.sources;
    let mut groups = Vec::new();

    match &config.fact_check_api_key {
        Some(key) => groups.push(SourceGroup::new(
            Arc::new(FactCheckSource::new(key)?),
            sources.fact_check_publishers.clone(),
        )),
        None => warn!("FACT_CHECK_API_KEY not set, fact-check API source disabled"),
    }

    groups.push(SourceGroup::new(
        Arc::new(FeedSource::new(true)?),
        sources.real_feeds.clone(),
    ));
    groups.push(SourceGroup::new(
        Arc::new(FeedSource::new(false)?),
        sources.fake_feeds.clone(),
    ));

    Ok(groups)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting fakeorfact");

    let cli = Cli::parse();
    info!(config = %cli.config.display(), "Loading config");
    let file_config = fakeorfact_common::file_config::load_config(&cli.config)?;

    let config = AppConfig::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let pg_store = PgClaimStore::new(pool);
    pg_store.migrate().await?;
    info!("Migrations complete");

    let store: Arc<dyn ClaimStore> = Arc::new(pg_store);

    let collector = Arc::new(Collector::new(
        build_source_groups(&config, &file_config)?,
        store.clone(),
    ));
    start_collection_interval(collector, file_config.collector.interval());

    let app = fakeorfact_api::router(store, file_config.server.public_dir.as_deref());

    let addr = format!("{}:{}", file_config.server.host, file_config.server.port);
    info!("fakeorfact API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
