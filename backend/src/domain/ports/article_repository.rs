//! Driven port for article storage.

use async_trait::async_trait;

use crate::domain::{Article, ArticleDraft, ArticleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by article storage adapters.
    pub enum ArticlePersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "article store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "article store query failed: {message}",
    }
}

/// Article storage. The store assigns ids on insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persist a draft and return it with its new id.
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticlePersistenceError>;

    /// Overwrite the editable fields. An absent id changes nothing.
    async fn update(&self, article: &Article) -> Result<(), ArticlePersistenceError>;

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticlePersistenceError>;

    /// Every article in ascending id order.
    async fn list_all(&self) -> Result<Vec<Article>, ArticlePersistenceError>;

    /// Remove the article if present. Deleting an absent id is not an error.
    async fn delete(&self, id: ArticleId) -> Result<(), ArticlePersistenceError>;
}
