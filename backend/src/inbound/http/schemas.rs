//! OpenAPI schemas for domain error types.
//!
//! The domain does not derive `ToSchema`; these mirrors are registered
//! under the domain type names instead.

use utoipa::ToSchema;

/// Mirror of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "forbidden")]
    Forbidden,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Mirror of [`crate::domain::ErrorReason`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorReason)]
pub enum ErrorReasonSchema {
    #[schema(rename = "illegal_user_id")]
    IllegalUserId,
    #[schema(rename = "illegal_password")]
    IllegalPassword,
    #[schema(rename = "illegal_user_name")]
    IllegalUserName,
    #[schema(rename = "illegal_email")]
    IllegalEmail,
    #[schema(rename = "illegal_writer")]
    IllegalWriter,
    #[schema(rename = "illegal_title")]
    IllegalTitle,
    #[schema(rename = "illegal_date")]
    IllegalDate,
    #[schema(rename = "user_not_exist")]
    UserNotExist,
    #[schema(rename = "article_not_exist")]
    ArticleNotExist,
    #[schema(rename = "wrong_password")]
    WrongPassword,
    #[schema(rename = "duplicate_user_id")]
    DuplicateUserId,
    #[schema(rename = "not_article_owner")]
    NotArticleOwner,
}

/// Mirror of [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "title must not be blank")]
    message: String,
    reason: Option<ErrorReasonSchema>,
    #[schema(example = "6f1c3a8e-0000-4000-8000-000000000001")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}
