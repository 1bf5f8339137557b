//! Relay HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the
//! Axum server until `Ctrl-C` is received.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use gmodsync_core::RelayConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::router::{ENDPOINTS, build_router};
use crate::state::AppState;

/// Start the relay HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`, then drains in-flight requests. Handlers
/// see the caller's socket address through `ConnectInfo`.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &RelayConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let ip: IpAddr = config
        .host
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address {}: {e}", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Relay server listening");
    for (method, path, description) in ENDPOINTS {
        info!(method, path, "{description}");
    }

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Relay server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, run until the process is killed.
        warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Errors that can occur when starting or running the relay server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}
