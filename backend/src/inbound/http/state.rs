//! Port bundle handed to handlers through `web::Data`.
//!
//! Handlers depend on driving ports only, so tests can swap in mocks or the
//! in-memory composition without touching I/O.

use std::sync::Arc;

use crate::domain::ports::{ArticleCommand, ArticleQuery, UserCommand, UsersQuery};

#[derive(Clone)]
pub struct HttpState {
    pub user_commands: Arc<dyn UserCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub article_commands: Arc<dyn ArticleCommand>,
    pub articles: Arc<dyn ArticleQuery>,
}

impl HttpState {
    /// Wire a state from one service per side.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cafe::domain::{ArticleService, UserAccountService};
    /// use cafe::inbound::http::state::HttpState;
    /// use cafe::outbound::memory::{InMemoryArticleRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let users = Arc::new(UserAccountService::new(Arc::new(InMemoryUserRepository::default())));
    /// let articles = Arc::new(ArticleService::new(
    ///     Arc::new(InMemoryArticleRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::from_services(users, articles);
    /// # let _ = state;
    /// ```
    pub fn from_services<U, A>(users: Arc<U>, articles: Arc<A>) -> Self
    where
        U: UserCommand + UsersQuery + 'static,
        A: ArticleCommand + ArticleQuery + 'static,
    {
        Self {
            user_commands: users.clone(),
            users,
            article_commands: articles.clone(),
            articles,
        }
    }
}
