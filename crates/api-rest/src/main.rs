//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). The workspace's main `nutriverse-run` binary is
//! the production entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use nutriverse_core::config::data_file_from_env_value;
use nutriverse_core::CoreConfig;

/// Main entry point for the Nutriverse REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000) and serves the bundled dataset unless an override file is
/// configured.
///
/// # Environment Variables
/// - `NUTRIVERSE_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `NUTRIVERSE_DATA_FILE`: Optional path to a JSON dataset override
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the dataset fails to load or validate,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NUTRIVERSE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Nutriverse REST API on {}", addr);

    let data_file = data_file_from_env_value(std::env::var("NUTRIVERSE_DATA_FILE").ok());
    let cfg = CoreConfig::new(data_file)?;
    let store = cfg.load_store()?;
    tracing::info!("loaded food store with {} records", store.len());

    let state = AppState {
        store: Arc::new(store),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
