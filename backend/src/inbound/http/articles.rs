//! Board article endpoints.
//!
//! Reads are public. Writes need a logged-in member; the writer name and
//! owner id are taken from that member, never from the body.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::{UpdateArticleRequest, WriteArticleRequest};
use crate::domain::{
    Article, ArticleId, CREATED_AT_FORMAT, Error, ErrorCode, ErrorReason, UserId, UserInfo,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_article_id;

/// Body of `POST /api/v1/articles` and `PUT /api/v1/articles/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleBody {
    #[schema(example = "Opening hours")]
    pub title: String,
    #[schema(example = "We open at nine on weekdays.")]
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "champ")]
    pub user_id: String,
    #[schema(example = "Champ")]
    pub writer: String,
    pub title: String,
    pub contents: String,
    /// Minute precision, `YYYY-MM-DD HH:MM`.
    #[schema(example = "2024-05-17 09:41")]
    pub created_at: String,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().get(),
            user_id: article.user_id().to_string(),
            writer: article.writer().to_string(),
            title: article.title().to_string(),
            contents: article.contents().as_ref().to_owned(),
            created_at: article
                .created_at()
                .as_naive()
                .format(CREATED_AT_FORMAT)
                .to_string(),
        }
    }
}

/// The logged-in member. A session naming an unknown member counts as no login.
async fn current_member(state: &HttpState, session: &SessionContext) -> Result<UserInfo, Error> {
    let user_id = session.require_user_id()?;
    state
        .users
        .find_user(user_id.as_ref())
        .await
        .map_err(|error| {
            if error.reason() == Some(ErrorReason::UserNotExist) {
                warn!(%user_id, "session names an unknown member");
                Error::unauthorized("login required")
            } else {
                error
            }
        })
}

fn not_owner(id: ArticleId, user_id: &UserId) -> Error {
    Error::forbidden(format!("article {id} is not owned by {user_id}"))
        .with_reason(ErrorReason::NotArticleOwner)
}

/// Load an article and make sure `member` owns it.
async fn owned_article(state: &HttpState, id: ArticleId, member: &UserInfo) -> Result<Article, Error> {
    let article = state.articles.find_article(id).await?;
    if article.is_owned_by(member.user_id()) {
        Ok(article)
    } else {
        Err(not_owner(id, member.user_id()))
    }
}

fn is_missing_article(error: &Error) -> bool {
    error.code() == ErrorCode::NotFound && error.reason() == Some(ErrorReason::ArticleNotExist)
}

/// List every article in id order.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Articles", body = [ArticleResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "listArticles",
    security([])
)]
#[get("/articles")]
pub async fn list_articles(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ArticleResponse>>> {
    let articles = state.articles.list_articles().await?;
    Ok(web::Json(articles.iter().map(ArticleResponse::from).collect()))
}

/// Post an article as the logged-in member.
#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleBody,
    responses(
        (status = 201, description = "Written", body = ArticleResponse),
        (status = 400, description = "Title is blank", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "writeArticle",
    security(("SessionCookie" = []))
)]
#[post("/articles")]
pub async fn write_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ArticleBody>,
) -> ApiResult<HttpResponse> {
    let member = current_member(&state, &session).await?;
    let ArticleBody { title, contents } = payload.into_inner();
    let article = state
        .article_commands
        .write(WriteArticleRequest {
            writer: member.name().to_string(),
            title,
            contents,
            user_id: member.user_id().to_string(),
        })
        .await?;
    Ok(HttpResponse::Created().json(ArticleResponse::from(&article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article", body = ArticleResponse),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "getArticle",
    security([])
)]
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ArticleResponse>> {
    let id = parse_article_id(&path)?;
    let article = state.articles.find_article(id).await?;
    Ok(web::Json(ArticleResponse::from(&article)))
}

/// Replace title and contents of an article the member owns.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleBody,
    responses(
        (status = 200, description = "Updated", body = ArticleResponse),
        (status = 400, description = "Title is blank", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema),
        (status = 404, description = "No such article", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "updateArticle",
    security(("SessionCookie" = []))
)]
#[put("/articles/{id}")]
pub async fn update_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ArticleBody>,
) -> ApiResult<web::Json<ArticleResponse>> {
    let member = current_member(&state, &session).await?;
    let id = parse_article_id(&path)?;
    owned_article(&state, id, &member).await?;

    let ArticleBody { title, contents } = payload.into_inner();
    let article = state
        .article_commands
        .update(UpdateArticleRequest {
            id,
            title,
            contents,
            writer: member.name().to_string(),
            user_id: member.user_id().to_string(),
        })
        .await?
        .ok_or_else(|| {
            Error::not_found(format!("article {id} does not exist"))
                .with_reason(ErrorReason::ArticleNotExist)
        })?;
    Ok(web::Json(ArticleResponse::from(&article)))
}

/// Delete an article the member owns. Deleting an absent article succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Deleted or already absent"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 403, description = "Not the owner", body = ErrorSchema)
    ),
    tags = ["articles"],
    operation_id = "deleteArticle",
    security(("SessionCookie" = []))
)]
#[delete("/articles/{id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let member = current_member(&state, &session).await?;
    let id = match parse_article_id(&path) {
        Ok(id) => id,
        Err(error) if is_missing_article(&error) => return Ok(HttpResponse::NoContent().finish()),
        Err(error) => return Err(error),
    };

    match owned_article(&state, id, &member).await {
        Ok(_) => state.article_commands.delete(id).await?,
        Err(error) if is_missing_article(&error) => {}
        Err(error) => return Err(error),
    }
    Ok(HttpResponse::NoContent().finish())
}
