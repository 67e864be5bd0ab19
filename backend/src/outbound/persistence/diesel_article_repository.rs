//! PostgreSQL-backed [`ArticleRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ArticlePersistenceError, ArticleRepository};
use crate::domain::{Article, ArticleDraft, ArticleId, CreatedAt};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, map_pool_error};
use super::models::{ArticleRow, ArticleUpdate, NewArticleRow};
use super::pool::DbPool;
use super::schema::articles;

#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error, operation: &'static str) -> ArticlePersistenceError {
    match classify_diesel_error(error, operation) {
        DieselFailure::Connection(message) => ArticlePersistenceError::connection(message),
        DieselFailure::UniqueViolation => {
            ArticlePersistenceError::query(format!("{operation}: duplicate article id"))
        }
        DieselFailure::Query(message) => ArticlePersistenceError::query(message),
    }
}

fn row_to_article(row: ArticleRow) -> Result<Article, ArticlePersistenceError> {
    let ArticleRow {
        id,
        user_id,
        writer,
        title,
        contents,
        created_at,
    } = row;
    let corrupt = |detail: String| {
        ArticlePersistenceError::query(format!("stored article {id} is invalid: {detail}"))
    };
    let id = ArticleId::new(id).map_err(|err| corrupt(err.to_string()))?;
    let draft = ArticleDraft::try_from_strings(
        writer,
        title,
        contents,
        user_id,
        CreatedAt::from_naive(created_at),
    )
    .map_err(|err| corrupt(err.to_string()))?;
    Ok(Article::new(id, draft))
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        let row = NewArticleRow {
            user_id: draft.user_id().as_ref(),
            writer: draft.writer().as_ref(),
            title: draft.title().as_ref(),
            contents: draft.contents().as_ref(),
            created_at: draft.created_at().as_naive(),
        };
        let stored: ArticleRow = diesel::insert_into(articles::table)
            .values(&row)
            .returning(ArticleRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert article"))?;
        row_to_article(stored)
    }

    async fn update(&self, article: &Article) -> Result<(), ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        let changes = ArticleUpdate {
            user_id: article.user_id().as_ref(),
            writer: article.writer().as_ref(),
            title: article.title().as_ref(),
            contents: article.contents().as_ref(),
        };
        diesel::update(articles::table.find(article.id().get()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update article"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        let row = articles::table
            .find(id.get())
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find article"))?;
        row.map(row_to_article).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        let rows: Vec<ArticleRow> = articles::table
            .order(articles::id.asc())
            .select(ArticleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list articles"))?;
        rows.into_iter().map(row_to_article).collect()
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ArticlePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ArticlePersistenceError::connection))?;

        diesel::delete(articles::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete article"))?;
        Ok(())
    }
}
