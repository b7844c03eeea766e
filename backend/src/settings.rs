//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SITE_*` environment variables and an optional
//! configuration file. Without `database_url` the service runs on the
//! in-memory store.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration values controlling the HTTP listener and the store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SITE")]
pub struct AppSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Socket address built from `host` and `port`, with defaults applied.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether to apply embedded migrations at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
