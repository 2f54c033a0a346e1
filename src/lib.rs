//! statusd - a minimal HTTP health/status service.
//!
//! Exposes a liveness probe and a welcome message over HTTP. Configuration
//! is read once from the process environment at startup; request handlers
//! hold no mutable state.

pub mod config;
pub mod routes;
pub mod server;
pub mod state;
