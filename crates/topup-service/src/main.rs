//! DS Store Top-Up Service - HTTP API for the storefront
//!
//! This is the main entry point for the topup service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topup_service::{create_router, AppState, ServiceConfig};
use topup_store::{seed_catalog, PgStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,topup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Top-Up Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        seed_catalog = config.seed_catalog,
        "Service configuration loaded"
    );

    // Connect to PostgreSQL and apply migrations
    let store = PgStore::connect(&config.database_url).await?;
    store.migrate().await?;
    tracing::info!("Database migrations applied");

    if config.seed_catalog {
        let inserted = seed_catalog(&store).await?;
        tracing::info!(inserted, "Catalog seeding finished");
    }

    // Build app state and router
    let state = AppState::new(Arc::new(store), config.clone());
    let app = create_router(state);

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
