// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::ingestion_service::IngestionService;
use crate::application::reading_store::ReadingStore;
use crate::application::snapshot_service::SnapshotService;
use crate::infrastructure::config::load_hub_config;
use crate::infrastructure::memory_store::InMemoryReadingStore;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_hub_config()?;

    // Initialize tracing, RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create store (infrastructure layer), lives for the process lifetime
    let store: Arc<dyn ReadingStore> = Arc::new(InMemoryReadingStore::new());

    // Create services (application layer)
    let ingestion_service = IngestionService::new(store.clone());
    let snapshot_service = SnapshotService::new(store, config.snapshot.recent_window);

    // Create application state
    let state = Arc::new(AppState {
        ingestion_service,
        snapshot_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting microclimate-hub on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
