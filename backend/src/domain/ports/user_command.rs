//! Driving port for member registration, profile edits, and login.
//!
//! Requests carry the raw strings the client sent; every rule is enforced by
//! the implementation, never by the adapter.

use std::fmt;

use async_trait::async_trait;

use crate::domain::{Error, UserInfo};

/// Sign-up payload.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterUserRequest {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Password-gated profile edit.
///
/// `new_password: None` keeps the stored password.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub new_password: Option<String>,
    pub old_password: String,
}

impl fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("changes_password", &self.new_password.is_some())
            .finish_non_exhaustive()
    }
}

/// Login credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Validate and store a new member.
    async fn register(&self, request: RegisterUserRequest) -> Result<UserInfo, Error>;

    /// Replace name, email and optionally the password after checking the
    /// current password.
    async fn update_profile(&self, request: UpdateUserRequest) -> Result<UserInfo, Error>;

    /// Check credentials and return the member they belong to.
    async fn authenticate(&self, request: LoginRequest) -> Result<UserInfo, Error>;
}
