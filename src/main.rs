//! Main entry point for the Nutriverse service.
//!
//! Boots the REST API server with the record store loaded once at startup.
//! The store is immutable for the lifetime of the process, so concurrent
//! requests share it with no synchronisation.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use nutriverse_core::config::data_file_from_env_value;
use nutriverse_core::CoreConfig;

/// Main entry point for the Nutriverse application
///
/// Starts the REST server on port 3000 (configurable via
/// `NUTRIVERSE_REST_ADDR`) serving the bundled food dataset, or the dataset
/// named by `NUTRIVERSE_DATA_FILE` when set.
///
/// # Environment Variables
/// - `NUTRIVERSE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `NUTRIVERSE_DATA_FILE`: Optional path to a JSON dataset override
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nutriverse=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("NUTRIVERSE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting Nutriverse REST on {}", addr);

    let data_file = data_file_from_env_value(std::env::var("NUTRIVERSE_DATA_FILE").ok());
    let cfg = CoreConfig::new(data_file)?;
    let store = cfg.load_store()?;
    tracing::info!("++ Loaded {} food records", store.len());

    let state = AppState {
        store: Arc::new(store),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
