//! Driving port for reading member profiles.

use async_trait::async_trait;

use crate::domain::{Error, UserInfo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All members in registration order.
    async fn list_users(&self) -> Result<Vec<UserInfo>, Error>;

    /// One member's profile; `NotFound` with reason `user_not_exist` when
    /// nobody holds `user_id`.
    async fn find_user(&self, user_id: &str) -> Result<UserInfo, Error>;
}
