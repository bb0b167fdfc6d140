//! Gym Coach API server binary.
//!
//! Wires configuration, logging, and the optional database integration
//! into the API and serves it until shutdown.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Build the database integration, if enabled
//! 4. Serve the API until `Ctrl-C` or `SIGTERM`

mod config;
mod error;

use std::sync::Arc;

use gymcoach_api::{AppState, start_server};
use gymcoach_db::DatabaseIntegration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DatabaseSettings, ServiceConfig};
use crate::error::ServiceError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "gymcoach-server starting"
    );

    run().await?;
    Ok(())
}

/// Load configuration and serve until shutdown.
async fn run() -> Result<(), ServiceError> {
    // 2. Load configuration.
    let config = ServiceConfig::from_env()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        database_enabled = config.database.enabled,
        "Configuration loaded"
    );

    // 3. Build the database integration.
    let database = build_database(&config.database);

    // 4. Serve.
    let state = Arc::new(AppState::new(database));
    start_server(&config.server, state).await?;

    info!("gymcoach-server shutdown complete");
    Ok(())
}

/// Build the optional database integration from settings.
///
/// Returns `None` when the integration is switched off. A missing or
/// unusable URL still yields an integration, so the diagnostic endpoint
/// can say what is wrong.
fn build_database(settings: &DatabaseSettings) -> Option<DatabaseIntegration> {
    if !settings.enabled {
        info!("Database integration disabled");
        return None;
    }
    let config = settings.postgres_config();
    Some(DatabaseIntegration::from_postgres(config.as_ref()))
}
