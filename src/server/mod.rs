//! HTTP server module.
//!
//! Binds the listener and serves the router until a termination signal,
//! with graceful shutdown on SIGTERM/SIGINT.

mod shutdown;
mod startup;

pub use startup::{start_server, ServerError};
