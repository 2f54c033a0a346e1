//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe used by Kubernetes, ECS, systemd, and
//! load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Fixed payload returned by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check handler.
///
/// Always succeeds with the same payload; it only checks that the process
/// can respond to HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
