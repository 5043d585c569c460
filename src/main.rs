//! olympus-detailing: booking and quote service

use std::sync::Arc;

use anyhow::Context;
use olympus_detailing::booking::{BookingEngine, Catalog};
use olympus_detailing::config::Config;
use olympus_detailing::store::BookingStore;
use olympus_detailing::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olympus_detailing=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).context("failed to load catalog")?,
        None => {
            tracing::info!("Using built-in catalog");
            Catalog::default()
        }
    };
    let engine = BookingEngine::new(Arc::new(catalog));

    let store = match &config.bookings_path {
        Some(path) => BookingStore::open(path).await,
        None => {
            tracing::warn!("BOOKINGS_PATH not set, bookings are kept in memory only");
            BookingStore::in_memory()
        }
    };

    let router = app(AppState::new(engine, store), config.cors_allow_any);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("olympus-detailing listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
