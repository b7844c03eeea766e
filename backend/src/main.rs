//! Backend entry-point: loads settings, prepares the store and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use site_backend::AppSettings;
use site_backend::inbound::http::health::HealthState;
use site_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

#[cfg(feature = "metrics")]
use server::build_metrics;
use server::{ContentStore, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("SITE_HOST must be an IP address")?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(url) = settings.database_url() {
        if settings.run_migrations() {
            let applied = run_pending_migrations(url)
                .await
                .wrap_err("failed to apply database migrations")?;
            info!(applied, "database migrations applied");
        }
        let pool = DbPool::new(
            PoolConfig::new(url).with_max_size(settings.db_max_connections()),
        )
        .await
        .wrap_err("failed to build database pool")?;
        config = config.with_store(ContentStore::Postgres(pool));
    }

    #[cfg(feature = "metrics")]
    {
        config = config.with_metrics(build_metrics()?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}
