//! Path parameter parsing shared by the handlers.

use serde_json::json;

use crate::domain::{ArticleId, Error, ErrorReason};

/// Parse an `{id}` path segment into an [`ArticleId`].
///
/// Non-numeric and non-positive ids are both `article_not_exist`: no such
/// article can ever be stored.
pub(crate) fn parse_article_id(raw: &str) -> Result<ArticleId, Error> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| ArticleId::new(value).ok())
        .ok_or_else(|| {
            Error::not_found(format!("article {raw} does not exist"))
                .with_reason(ErrorReason::ArticleNotExist)
                .with_details(json!({ "id": raw }))
        })
}
