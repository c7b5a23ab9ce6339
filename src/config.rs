// src/config.rs
//! Process configuration, read from the environment (`.env` is loaded by the
//! binary via `dotenvy` before this runs).

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

// --- env names & defaults ---
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://the-one-api.herokuapp.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const LISTEN_PORT: u16 = 8090;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("must set 'API_KEY'")]
    MissingApiKey,
}

/// Connection settings for the upstream quotes API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    pub listen_addr: SocketAddr,
    /// Mounts `/metrics` when set.
    pub debug_routes: bool,
}

impl AppConfig {
    /// Build from process env. `API_KEY` is required and must be non-blank
    /// (it is sent as given); the upstream base URL and listen port are fixed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let debug_routes = std::env::var(ENV_DEBUG_ROUTES)
            .ok()
            .is_some_and(|v| v == "1");

        Ok(Self::new(api_key).with_debug_routes(debug_routes))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            upstream: UpstreamConfig {
                base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
                api_key: api_key.into(),
                timeout: DEFAULT_REQUEST_TIMEOUT,
            },
            listen_addr: SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT)),
            debug_routes: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.upstream.base_url = base_url.into();
        self
    }

    pub fn with_debug_routes(mut self, on: bool) -> Self {
        self.debug_routes = on;
        self
    }
}
