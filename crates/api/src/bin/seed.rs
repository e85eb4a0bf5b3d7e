//! Load the bundled catalog and media records into PostgreSQL.

use codeious_site_api::config::AppConfig;
use codeious_site_core::seed::seed_store;
use codeious_site_core::store::{Cms, PgBackend};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed the database"))?;

    let pg = PgBackend::connect(url, config.db_max_connections, config.db_min_connections).await?;
    pg.migrate().await?;

    let report = seed_store(&Cms::new(Arc::new(pg))).await?;
    tracing::info!(
        media_created = report.media_created,
        media_existing = report.media_existing,
        sections_replaced = report.sections_replaced,
        sections_created = report.sections_created,
        "Seeding complete"
    );
    Ok(())
}
