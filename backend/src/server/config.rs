//! Startup options gathered in `main` and consumed by [`super::create_server`].

use std::fmt;
use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use site_backend::outbound::persistence::DbPool;

/// Where content collections are kept.
#[derive(Clone, Default)]
pub enum ContentStore {
    /// Process memory; contents vanish on restart.
    #[default]
    InMemory,
    /// The `documents` table behind a connection pool.
    Postgres(DbPool),
}

impl fmt::Display for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InMemory => "memory",
            Self::Postgres(_) => "postgres",
        })
    }
}

/// Listener address, content store and optional Prometheus middleware.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: ContentStore,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Listen on `bind_addr` with the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: ContentStore::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: ContentStore) -> Self {
        self.store = store;
        self
    }

    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: PrometheusMetrics) -> Self {
        self.prometheus = Some(prometheus);
        self
    }
}
