//! HTTP server startup logic.

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not attach to the configured port, either because
    /// the port is already in use or the process lacks permission to bind it.
    /// Fatal; never retried.
    #[error("Failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Bind the listener on all interfaces and serve requests.
///
/// Blocks until a termination signal arrives, then drains in-flight
/// connections and returns.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            port: config.port,
            source,
        })?;

    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
