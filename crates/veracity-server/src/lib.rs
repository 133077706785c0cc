//! Veracity Server
//!
//! HTTP surface for the claim-verification service: claim submission,
//! history retrieval, and health check, wired over the engine, the
//! inference gateway, and the SQLite record store.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use veracity_engine::{HistoryReader, VerificationEngine};
use veracity_gateway::HttpInferenceGateway;
use veracity_store::SqliteStore;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Record store error
    #[error("Store error: {0}")]
    Store(#[from] veracity_store::StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server.
///
/// Opens the record store, builds the gateway from the resolved
/// endpoint, and serves the axum router until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Veracity server");
    info!("Bind address: {}", config.bind_addr());
    info!("Inference endpoint: {}", config.inference_url);
    info!("Database path: {}", config.db_path);

    let store = Arc::new(Mutex::new(SqliteStore::new(&config.db_path)?));

    let gateway = HttpInferenceGateway::with_timeout(
        &config.inference_url,
        Duration::from_secs(config.inference_timeout_secs),
    );

    let state = AppState {
        engine: Arc::new(VerificationEngine::new(gateway, Arc::clone(&store))),
        history: Arc::new(HistoryReader::new(store)),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
