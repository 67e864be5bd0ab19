//! Driven port for member storage.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by member storage adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "user store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "user store query failed: {message}",
        /// Another member already holds this identifier.
        DuplicateUserId { user_id: String } => "user id {user_id} is already registered",
        /// An update targeted a member that is not stored.
        Missing { user_id: String } => "user {user_id} is not stored",
    }
}

/// Member storage.
///
/// Lookups report absence as `Ok(None)`. Adapters own uniqueness of the user
/// id and must answer a clashing insert with
/// [`UserPersistenceError::DuplicateUserId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Overwrite the stored row for `user.user_id()`.
    async fn update(&self, user: &User) -> Result<(), UserPersistenceError>;

    async fn find_by_user_id(&self, user_id: &UserId)
    -> Result<Option<User>, UserPersistenceError>;

    /// Every member in registration order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;
}
