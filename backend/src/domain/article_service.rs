//! Article use cases.
//!
//! Creation time comes from the injected clock, never from the caller, so a
//! client cannot back-date an article.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    ArticleCommand, ArticlePersistenceError, ArticleQuery, ArticleRepository,
    UpdateArticleRequest, WriteArticleRequest,
};
use crate::domain::{Article, ArticleDraft, ArticleId, ArticleRevision, CreatedAt, Error, ErrorReason};

/// Implements [`ArticleCommand`] and [`ArticleQuery`] over an
/// [`ArticleRepository`].
#[derive(Clone)]
pub struct ArticleService<R> {
    articles: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ArticleService<R> {
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use cafe::domain::ArticleService;
    /// use cafe::outbound::memory::InMemoryArticleRepository;
    ///
    /// let service = ArticleService::new(
    ///     Arc::new(InMemoryArticleRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(articles: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { articles, clock }
    }
}

pub(crate) fn map_article_persistence_error(error: ArticlePersistenceError) -> Error {
    match error {
        ArticlePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("article store unavailable: {message}"))
        }
        ArticlePersistenceError::Query { message } => {
            Error::internal(format!("article store error: {message}"))
        }
    }
}

pub(crate) fn article_not_exist(id: impl std::fmt::Display) -> Error {
    Error::not_found(format!("article {id} does not exist"))
        .with_reason(ErrorReason::ArticleNotExist)
}

impl<R> ArticleService<R>
where
    R: ArticleRepository,
{
    async fn load(&self, id: ArticleId) -> Result<Article, Error> {
        self.articles
            .find_by_id(id)
            .await
            .map_err(map_article_persistence_error)?
            .ok_or_else(|| article_not_exist(id))
    }
}

#[async_trait]
impl<R> ArticleCommand for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn write(&self, request: WriteArticleRequest) -> Result<Article, Error> {
        let WriteArticleRequest {
            writer,
            title,
            contents,
            user_id,
        } = request;
        let created_at = CreatedAt::from_local(self.clock.local());
        let draft = ArticleDraft::try_from_strings(writer, title, contents, user_id, created_at)?;
        let article = self
            .articles
            .insert(&draft)
            .await
            .map_err(map_article_persistence_error)?;
        info!(article_id = %article.id(), user_id = %article.user_id(), "article written");
        Ok(article)
    }

    async fn update(&self, request: UpdateArticleRequest) -> Result<Option<Article>, Error> {
        let UpdateArticleRequest {
            id,
            title,
            contents,
            writer,
            user_id,
        } = request;
        let revision = ArticleRevision::try_from_strings(title, contents, writer, user_id)?;
        let Some(current) = self
            .articles
            .find_by_id(id)
            .await
            .map_err(map_article_persistence_error)?
        else {
            debug!(article_id = %id, "update of absent article ignored");
            return Ok(None);
        };
        let updated = current.revise(revision);
        self.articles
            .update(&updated)
            .await
            .map_err(map_article_persistence_error)?;
        info!(article_id = %id, "article updated");
        Ok(Some(updated))
    }

    async fn delete(&self, id: ArticleId) -> Result<(), Error> {
        self.articles
            .delete(id)
            .await
            .map_err(map_article_persistence_error)?;
        info!(article_id = %id, "article deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ArticleQuery for ArticleService<R>
where
    R: ArticleRepository,
{
    async fn find_article(&self, id: ArticleId) -> Result<Article, Error> {
        self.load(id).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, Error> {
        self.articles
            .list_all()
            .await
            .map_err(map_article_persistence_error)
    }
}

#[cfg(test)]
#[path = "article_service_tests.rs"]
mod tests;
