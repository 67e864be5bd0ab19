//! Board members.
//!
//! A [`User`] is only ever built from validated parts, so every stored user
//! satisfies the field rules. Reads go through the [`UserInfo`] projection,
//! which has no password field at all.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

use super::validation::{FieldRuleViolation, validate_compact, validate_non_blank};
use super::{Error, ErrorReason};

/// A raw user field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id {0}")]
    IllegalUserId(FieldRuleViolation),
    #[error("password {0}")]
    IllegalPassword(FieldRuleViolation),
    #[error("name {0}")]
    IllegalUserName(FieldRuleViolation),
    #[error("email {0}")]
    IllegalEmail(FieldRuleViolation),
}

impl UserValidationError {
    pub fn reason(self) -> ErrorReason {
        match self {
            Self::IllegalUserId(_) => ErrorReason::IllegalUserId,
            Self::IllegalPassword(_) => ErrorReason::IllegalPassword,
            Self::IllegalUserName(_) => ErrorReason::IllegalUserName,
            Self::IllegalEmail(_) => ErrorReason::IllegalEmail,
        }
    }

    fn field(self) -> &'static str {
        match self {
            Self::IllegalUserId(_) => "userId",
            Self::IllegalPassword(_) => "password",
            Self::IllegalUserName(_) => "name",
            Self::IllegalEmail(_) => "email",
        }
    }
}

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        Error::invalid_request(value.to_string())
            .with_reason(value.reason())
            .with_details(serde_json::json!({ "field": value.field() }))
    }
}

/// The supplied password does not match the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("password does not match")]
pub struct WrongPasswordError;

/// Unique login handle. Non-blank, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        Self::checked(id).map_err(UserValidationError::IllegalUserId)
    }

    /// Apply the identifier rules, leaving the caller to tag the violation.
    pub(crate) fn checked(id: String) -> Result<Self, FieldRuleViolation> {
        validate_compact(&id)?;
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Stored password. Only required to be non-blank; it is compared as-is.
///
/// The buffer is wiped on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = Zeroizing::new(password.into());
        validate_non_blank(&password).map_err(UserValidationError::IllegalPassword)?;
        Ok(Self(password))
    }

    /// Compare against a raw candidate without validating it.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }

    /// Raw value for persistence adapters.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Display name. Non-blank, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        validate_compact(&name).map_err(UserValidationError::IllegalUserName)?;
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Contact address shaped `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        validate_compact(&email).map_err(UserValidationError::IllegalEmail)?;
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::IllegalEmail(
                FieldRuleViolation::Malformed,
            ));
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Registered board member.
///
/// ## Invariants
/// - every field passed its validator on construction;
/// - `user_id` never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    user_id: UserId,
    password: Password,
    name: UserName,
    email: Email,
}

impl User {
    pub fn new(user_id: UserId, password: Password, name: UserName, email: Email) -> Self {
        Self {
            user_id,
            password,
            name,
            email,
        }
    }

    /// Validate raw fields in the order user id, password, name, email.
    ///
    /// # Examples
    /// ```
    /// use cafe::domain::{User, UserValidationError};
    ///
    /// let err = User::try_from_strings("champ", "", "", "").unwrap_err();
    /// assert!(matches!(err, UserValidationError::IllegalPassword(_)));
    /// ```
    pub fn try_from_strings(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let user_id = UserId::new(user_id)?;
        let password = Password::new(password)?;
        let name = UserName::new(name)?;
        let email = Email::new(email)?;
        Ok(Self::new(user_id, password, name, email))
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Fail unless `candidate` equals the stored password.
    pub fn verify_password(&self, candidate: &str) -> Result<(), WrongPasswordError> {
        if self.password.matches(candidate) {
            Ok(())
        } else {
            Err(WrongPasswordError)
        }
    }

    /// Replace the mutable profile fields, keeping the identity.
    #[must_use]
    pub fn with_profile(self, name: UserName, email: Email, password: Password) -> Self {
        Self {
            user_id: self.user_id,
            password,
            name,
            email,
        }
    }

    /// The password-free read projection.
    pub fn info(&self) -> UserInfo {
        UserInfo {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Read projection of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    user_id: UserId,
    name: UserName,
    email: Email,
}

impl UserInfo {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl From<&User> for UserInfo {
    fn from(value: &User) -> Self {
        value.info()
    }
}
