//! Server configuration for Graphwalk.
//!
//! Layered with `figment`: built-in defaults, then an optional TOML file,
//! then `GRAPHWALK_`-prefixed environment variables (`GRAPHWALK_PORT=9000`,
//! `GRAPHWALK_CORS_ORIGINS='["https://app.example"]'`).

use anyhow::{bail, Context};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port.
const DEFAULT_PORT: u16 = 8080;
/// Default request body limit (edge text is small).
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
/// Default tracing filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Graphwalk server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origins; empty means permissive.
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body, in bytes.
    pub max_body_bytes: usize,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Returns the layered figment: defaults → TOML file → environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Fails if `path` is given but does not exist, or if any layer holds a
    /// value of the wrong type.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
        }
        Self::figment(path)
            .extract()
            .context("Invalid Graphwalk configuration")
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
