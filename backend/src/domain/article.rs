//! Board articles.
//!
//! An [`ArticleDraft`] is what a member submits; the store assigns an
//! [`ArticleId`] and hands back an [`Article`]. Edits go through an
//! [`ArticleRevision`], which can touch everything except the id and the
//! creation time.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, Timelike};

use super::validation::{FieldRuleViolation, validate_compact, validate_non_blank};
use super::{Error, ErrorReason, UserId};

/// Wire and storage format of [`CreatedAt`].
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A raw article field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleValidationError {
    #[error("writer {0}")]
    IllegalWriter(FieldRuleViolation),
    #[error("title {0}")]
    IllegalTitle(FieldRuleViolation),
    #[error("user id {0}")]
    IllegalUserId(FieldRuleViolation),
    #[error("created at `{0}` is not formatted as yyyy-MM-dd HH:mm")]
    IllegalDate(String),
}

impl ArticleValidationError {
    pub fn reason(&self) -> ErrorReason {
        match self {
            Self::IllegalWriter(_) => ErrorReason::IllegalWriter,
            Self::IllegalTitle(_) => ErrorReason::IllegalTitle,
            Self::IllegalUserId(_) => ErrorReason::IllegalUserId,
            Self::IllegalDate(_) => ErrorReason::IllegalDate,
        }
    }

    fn field(&self) -> &'static str {
        match self {
            Self::IllegalWriter(_) => "writer",
            Self::IllegalTitle(_) => "title",
            Self::IllegalUserId(_) => "userId",
            Self::IllegalDate(_) => "createdAt",
        }
    }
}

impl From<ArticleValidationError> for Error {
    fn from(value: ArticleValidationError) -> Self {
        Error::invalid_request(value.to_string())
            .with_reason(value.reason())
            .with_details(serde_json::json!({ "field": value.field() }))
    }
}

/// Article ids are assigned by the store and always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("article id must be a positive integer, got {0}")]
pub struct InvalidArticleId(pub i64);

/// Store-assigned article identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(value: i64) -> Result<Self, InvalidArticleId> {
        if value <= 0 {
            return Err(InvalidArticleId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for ArticleId {
    type Error = InvalidArticleId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Author name shown on the board. Non-blank, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer(String);

impl Writer {
    pub fn new(writer: impl Into<String>) -> Result<Self, ArticleValidationError> {
        let writer = writer.into();
        validate_compact(&writer).map_err(ArticleValidationError::IllegalWriter)?;
        Ok(Self(writer))
    }
}

impl AsRef<str> for Writer {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Headline. Non-blank; inner spaces are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, ArticleValidationError> {
        let title = title.into();
        validate_non_blank(&title).map_err(ArticleValidationError::IllegalTitle)?;
        Ok(Self(title))
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body text. Unconstrained, may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents(String);

impl Contents {
    pub fn new(contents: impl Into<String>) -> Self {
        Self(contents.into())
    }
}

impl AsRef<str> for Contents {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Contents {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Creation time, local wall clock, truncated to the minute.
///
/// # Examples
/// ```
/// use cafe::domain::CreatedAt;
///
/// let at = CreatedAt::parse("2024-03-01 09:05").expect("valid");
/// assert_eq!(at.to_string(), "2024-03-01 09:05");
/// assert!(CreatedAt::parse("01/03/2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreatedAt(NaiveDateTime);

impl CreatedAt {
    /// Truncate to whole minutes.
    pub fn from_naive(value: NaiveDateTime) -> Self {
        let truncated = value
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(value);
        Self(truncated)
    }

    pub fn from_local(value: DateTime<Local>) -> Self {
        Self::from_naive(value.naive_local())
    }

    pub fn parse(raw: &str) -> Result<Self, ArticleValidationError> {
        NaiveDateTime::parse_from_str(raw, CREATED_AT_FORMAT)
            .map(Self)
            .map_err(|_| ArticleValidationError::IllegalDate(raw.to_owned()))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CREATED_AT_FORMAT))
    }
}

fn article_owner(user_id: String) -> Result<UserId, ArticleValidationError> {
    UserId::checked(user_id).map_err(ArticleValidationError::IllegalUserId)
}

/// An article that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    user_id: UserId,
    writer: Writer,
    title: Title,
    contents: Contents,
    created_at: CreatedAt,
}

impl ArticleDraft {
    pub fn new(
        user_id: UserId,
        writer: Writer,
        title: Title,
        contents: Contents,
        created_at: CreatedAt,
    ) -> Self {
        Self {
            user_id,
            writer,
            title,
            contents,
            created_at,
        }
    }

    /// Validate raw fields in the order writer, title, user id.
    pub fn try_from_strings(
        writer: impl Into<String>,
        title: impl Into<String>,
        contents: impl Into<String>,
        user_id: impl Into<String>,
        created_at: CreatedAt,
    ) -> Result<Self, ArticleValidationError> {
        let writer = Writer::new(writer)?;
        let title = Title::new(title)?;
        let user_id = article_owner(user_id.into())?;
        Ok(Self::new(
            user_id,
            writer,
            title,
            Contents::new(contents),
            created_at,
        ))
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn created_at(&self) -> CreatedAt {
        self.created_at
    }
}

/// Replacement values for an existing article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRevision {
    title: Title,
    contents: Contents,
    writer: Writer,
    user_id: UserId,
}

impl ArticleRevision {
    /// Validate raw fields in the order title, user id, writer.
    pub fn try_from_strings(
        title: impl Into<String>,
        contents: impl Into<String>,
        writer: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, ArticleValidationError> {
        let title = Title::new(title)?;
        let user_id = article_owner(user_id.into())?;
        let writer = Writer::new(writer)?;
        Ok(Self {
            title,
            contents: Contents::new(contents),
            writer,
            user_id,
        })
    }
}

/// A stored article.
///
/// ## Invariants
/// - `id` and `created_at` are fixed once the store assigns them;
/// - the remaining fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    draft: ArticleDraft,
}

impl Article {
    pub fn new(id: ArticleId, draft: ArticleDraft) -> Self {
        Self { id, draft }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        self.draft.user_id()
    }

    pub fn writer(&self) -> &Writer {
        self.draft.writer()
    }

    pub fn title(&self) -> &Title {
        self.draft.title()
    }

    pub fn contents(&self) -> &Contents {
        self.draft.contents()
    }

    pub fn created_at(&self) -> CreatedAt {
        self.draft.created_at()
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.draft.user_id() == user_id
    }

    /// Apply a revision in place of the editable fields.
    #[must_use]
    pub fn revise(self, revision: ArticleRevision) -> Self {
        let ArticleRevision {
            title,
            contents,
            writer,
            user_id,
        } = revision;
        let created_at = self.draft.created_at;
        Self {
            id: self.id,
            draft: ArticleDraft::new(user_id, writer, title, contents, created_at),
        }
    }
}
