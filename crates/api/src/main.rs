use std::net::SocketAddr;
use std::sync::Arc;

use codeious_site_api::config::AppConfig;
use codeious_site_api::state::AppState;
use codeious_site_api::{build_app, listeners};
use codeious_site_core::events::EventBus;
use codeious_site_core::seed::seed_store;
use codeious_site_core::store::{Cms, MemoryBackend, PgBackend, StoreBackend};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting codeious site API server");

    let backend: Arc<dyn StoreBackend> = match &config.database_url {
        Some(url) => {
            let pg = PgBackend::connect(url, config.db_max_connections, config.db_min_connections)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;
            tracing::info!("Connected to PostgreSQL");
            pg.migrate()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
            tracing::info!("Database migrations applied");
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving from an in-memory store");
            Arc::new(MemoryBackend::new())
        }
    };

    let event_bus = EventBus::new(config.event_bus_capacity);
    let _logger = listeners::spawn_content_logger(&event_bus);
    let cms = Cms::new(backend).with_events(event_bus.clone());

    if config.database_url.is_none() {
        let report = seed_store(&cms)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed in-memory store: {e}"))?;
        tracing::info!(?report, "In-memory store seeded");
    }

    let state = AppState::new(cms, config.clone(), event_bus);
    let app = build_app(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
