use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ArticlePersistenceError, ArticleRepository};
use crate::domain::{Article, ArticleDraft, ArticleId};

#[derive(Debug)]
struct Board {
    next_id: i64,
    articles: BTreeMap<ArticleId, Article>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            next_id: 1,
            articles: BTreeMap::new(),
        }
    }
}

/// Articles keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    board: Mutex<Board>,
}

impl InMemoryArticleRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Board>, ArticlePersistenceError> {
        self.board
            .lock()
            .map_err(|_| ArticlePersistenceError::query("article store lock poisoned"))
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, ArticlePersistenceError> {
        let mut board = self.lock()?;
        let id = ArticleId::new(board.next_id)
            .map_err(|err| ArticlePersistenceError::query(err.to_string()))?;
        board.next_id += 1;
        let article = Article::new(id, draft.clone());
        board.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, article: &Article) -> Result<(), ArticlePersistenceError> {
        if let Some(slot) = self.lock()?.articles.get_mut(&article.id()) {
            *slot = article.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, ArticlePersistenceError> {
        Ok(self.lock()?.articles.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticlePersistenceError> {
        Ok(self.lock()?.articles.values().cloned().collect())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ArticlePersistenceError> {
        self.lock()?.articles.remove(&id);
        Ok(())
    }
}
