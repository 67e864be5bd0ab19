//! Board server entry point.

mod server;

use actix_web::web;
use cafe::inbound::http::health::HealthState;
use cafe::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::session::{BuildMode, load_session_key};
use server::settings::ServerSettings;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let key = load_session_key(&settings, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(key, settings.cookie_secure, bind_addr);
    if let Some(url) = settings.database_url() {
        let applied = run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
        info!(count = applied.len(), "migrations applied");

        let pool = DbPool::new(
            PoolConfig::new(url).with_max_size(settings.database_max_connections()),
        )
        .await
        .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "board listening");
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
