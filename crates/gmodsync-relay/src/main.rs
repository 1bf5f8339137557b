//! GmodSync relay binary.
//!
//! Receives status snapshots pushed by a Garry's Mod server and serves
//! them to dashboards.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize structured logging (tracing)
//! 3. Create the status store holding the "no data yet" placeholder
//! 4. Serve the relay API until `Ctrl-C`

mod error;

use std::sync::Arc;

use gmodsync_api::AppState;
use gmodsync_core::config::LogFormat;
use gmodsync_core::{RelayConfig, StatusStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::RelayError;

/// Application entry point for the relay.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server
/// cannot bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging depends on it, so this comes first.
    let config = RelayConfig::from_env().map_err(RelayError::from)?;

    // 2. Initialize structured logging.
    init_tracing(config.log_format);

    info!("gmodsync-relay starting");
    info!(
        host = config.host,
        port = config.port,
        body_limit_bytes = config.body_limit_bytes,
        "Configuration loaded"
    );
    if config.uses_default_token() {
        warn!("API_TOKEN is unset, using the built-in default token");
    }

    // 3. Create the status store.
    let store = Arc::new(StatusStore::new());
    let state = Arc::new(
        AppState::new(store, config.api_token.clone()).with_body_limit(config.body_limit_bytes),
    );

    // 4. Serve until shutdown.
    gmodsync_api::start_server(&config, state)
        .await
        .map_err(RelayError::from)?;

    info!("gmodsync-relay stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
