//! Transport-agnostic error payload returned by the use-case ports.
//!
//! Services turn entity validation failures, missing records, and storage
//! failures into [`Error`]. Inbound adapters decide how an [`ErrorCode`] is
//! rendered (HTTP status, log level); the [`ErrorReason`] names the exact rule
//! that failed so clients can branch on it without parsing messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Coarse failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The request clashes with stored state.
    Conflict,
    /// A backing store is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Stable identifier of the board rule a request broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    IllegalUserId,
    IllegalPassword,
    IllegalUserName,
    IllegalEmail,
    IllegalWriter,
    IllegalTitle,
    IllegalDate,
    UserNotExist,
    ArticleNotExist,
    WrongPassword,
    DuplicateUserId,
    NotArticleOwner,
}

impl ErrorReason {
    /// The `snake_case` wire form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IllegalUserId => "illegal_user_id",
            Self::IllegalPassword => "illegal_password",
            Self::IllegalUserName => "illegal_user_name",
            Self::IllegalEmail => "illegal_email",
            Self::IllegalWriter => "illegal_writer",
            Self::IllegalTitle => "illegal_title",
            Self::IllegalDate => "illegal_date",
            Self::UserNotExist => "user_not_exist",
            Self::ArticleNotExist => "article_not_exist",
            Self::WrongPassword => "wrong_password",
            Self::DuplicateUserId => "duplicate_user_id",
            Self::NotArticleOwner => "not_article_owner",
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error payload shared by every driving port.
///
/// # Examples
/// ```
/// use cafe::domain::{Error, ErrorCode, ErrorReason};
///
/// let err = Error::not_found("article 5 does not exist").with_reason(ErrorReason::ArticleNotExist);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.reason(), Some(ErrorReason::ArticleNotExist));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            reason: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The violated rule, when the failure maps to one.
    pub fn reason(&self) -> Option<ErrorReason> {
        self.reason
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    #[must_use]
    pub fn with_reason(mut self, reason: ErrorReason) -> Self {
        self.reason = Some(reason);
        self
    }

    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Attach structured details such as the offending field name.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            Some(reason) => write!(f, "{} ({reason})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for Error {}
