//! Configuration loading and constants.
//!
//! Reads application configuration from environment variables exactly once
//! at startup. `AppConfig` is immutable for the process lifetime; request
//! handlers never consult the environment directly.

use std::env;

/// Default listener port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Default environment name when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "statusd=info,tower_http=info";

/// Verbose log filter used when `DEBUG=true`.
pub const DEBUG_LOG_FILTER: &str = "statusd=debug,tower_http=debug";

/// Cache-Control value for the health endpoint. Liveness probes must never
/// be answered from an upstream cache.
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Application configuration, constructed once before the listener starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener port (`PORT`, default 8000)
    pub port: u16,
    /// Verbose logging flag (`DEBUG`, default false)
    pub debug: bool,
    /// Deployment environment name (`ENVIRONMENT`, default "development").
    /// Informational only; logged at startup.
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    ///
    /// Factored out of [`from_env`](Self::from_env) so tests can supply a
    /// map instead of mutating the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        // Anything other than a case-insensitive "true" means false,
        // including an unset variable.
        let debug = lookup("DEBUG")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            port,
            debug,
            environment,
        })
    }

    /// Default log filter for this configuration (debug mode widens it).
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0:?} (expected an integer in 0-65535)")]
    InvalidPort(String),
}
