//! Composition of services and storage adapters.

use std::sync::Arc;

use cafe::domain::{ArticleService, UserAccountService};
use cafe::inbound::http::state::HttpState;
use cafe::outbound::memory::{InMemoryArticleRepository, InMemoryUserRepository};
use cafe::outbound::persistence::{DbPool, DieselArticleRepository, DieselUserRepository};
use mockable::{Clock, DefaultClock};
use tracing::warn;

use super::ServerConfig;

fn with_repositories<U, A>(users: U, articles: A, clock: Arc<dyn Clock>) -> HttpState
where
    U: cafe::domain::ports::UserRepository + 'static,
    A: cafe::domain::ports::ArticleRepository + 'static,
{
    HttpState::from_services(
        Arc::new(UserAccountService::new(Arc::new(users))),
        Arc::new(ArticleService::new(Arc::new(articles), clock)),
    )
}

fn diesel_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    with_repositories(
        DieselUserRepository::new(pool.clone()),
        DieselArticleRepository::new(pool.clone()),
        clock,
    )
}

fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    warn!("no database configured; board contents are lost on restart");
    with_repositories(
        InMemoryUserRepository::default(),
        InMemoryArticleRepository::default(),
        clock,
    )
}

/// PostgreSQL adapters when a pool is configured, in-memory ones otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => diesel_state(pool, clock),
        None => in_memory_state(clock),
    }
}
