//! Driving port for changing the board.

use async_trait::async_trait;

use crate::domain::{Article, ArticleId, Error};

/// New article as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteArticleRequest {
    pub writer: String,
    pub title: String,
    pub contents: String,
    pub user_id: String,
}

/// Replacement fields for a stored article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateArticleRequest {
    pub id: ArticleId,
    pub title: String,
    pub contents: String,
    pub writer: String,
    pub user_id: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCommand: Send + Sync {
    /// Validate, timestamp and store a new article.
    async fn write(&self, request: WriteArticleRequest) -> Result<Article, Error>;

    /// Replace the editable fields of a stored article.
    ///
    /// Returns `None` when no article has the id; nothing is written then.
    async fn update(&self, request: UpdateArticleRequest) -> Result<Option<Article>, Error>;

    /// Remove an article. Succeeds whether or not it exists.
    async fn delete(&self, id: ArticleId) -> Result<(), Error>;
}
