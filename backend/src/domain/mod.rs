//! Domain entities, use-case services, and the ports around them.
//!
//! Nothing in here knows about HTTP or SQL. Inbound adapters call the driving
//! ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - [`User`], [`UserInfo`] and their field newtypes.
//! - [`Article`], [`ArticleDraft`], [`ArticleRevision`] and their field
//!   newtypes.
//! - [`Error`], [`ErrorCode`], [`ErrorReason`]: the payload every use case
//!   fails with.
//! - [`UserAccountService`], [`ArticleService`]: the use-case implementations.

pub mod article;
pub mod article_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::article::{
    Article, ArticleDraft, ArticleId, ArticleRevision, ArticleValidationError, CREATED_AT_FORMAT,
    Contents, CreatedAt, InvalidArticleId, Title, Writer,
};
pub use self::article_service::ArticleService;
pub use self::error::{Error, ErrorCode, ErrorReason, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{
    Email, Password, User, UserId, UserInfo, UserName, UserValidationError, WrongPasswordError,
};
pub use self::user_service::UserAccountService;
pub use self::validation::FieldRuleViolation;
