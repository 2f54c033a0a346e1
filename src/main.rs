//! statusd: a minimal HTTP health/status service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from environment variables, sets up the Axum router, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statusd::config::AppConfig;
use statusd::server::start_server;
use statusd::routes::create_router;
use statusd::state::AppState;

/// statusd: A minimal HTTP health/status service
#[derive(Parser, Debug)]
#[command(name = "statusd", version, about)]
struct Args {
    /// Log level filter (e.g., "statusd=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (read exactly once, before the listener starts)
    let config = AppConfig::from_env()?;

    // Initialize tracing with priority: CLI > env > default (DEBUG-aware)
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.default_log_filter().to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        debug = config.debug,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; a bind failure is fatal and exits non-zero
    start_server(app, &config).await?;

    Ok(())
}
