use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// Members kept in registration order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.lock()?;
        if users.iter().any(|stored| stored.user_id() == user.user_id()) {
            return Err(UserPersistenceError::duplicate_user_id(
                user.user_id().as_ref(),
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.lock()?;
        let slot = users
            .iter_mut()
            .find(|stored| stored.user_id() == user.user_id())
            .ok_or_else(|| UserPersistenceError::missing(user.user_id().as_ref()))?;
        *slot = user.clone();
        Ok(())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = self.lock()?;
        Ok(users.iter().find(|stored| stored.user_id() == user_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.clone())
    }
}
