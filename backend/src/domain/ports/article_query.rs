//! Driving port for reading the board.

use async_trait::async_trait;

use crate::domain::{Article, ArticleId, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleQuery: Send + Sync {
    /// `NotFound` with reason `article_not_exist` when absent.
    async fn find_article(&self, id: ArticleId) -> Result<Article, Error>;

    /// Every article, oldest id first.
    async fn list_articles(&self) -> Result<Vec<Article>, Error>;
}
