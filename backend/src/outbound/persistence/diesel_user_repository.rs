//! PostgreSQL-backed [`UserRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, map_pool_error};
use super::models::{UserRow, UserWrite};
use super::pool::DbPool;
use super::schema::users;

#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(
    error: diesel::result::Error,
    operation: &'static str,
    user_id: &str,
) -> UserPersistenceError {
    match classify_diesel_error(error, operation) {
        DieselFailure::UniqueViolation => UserPersistenceError::duplicate_user_id(user_id),
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

/// Rows were validated on the way in; a failure here means the table was
/// edited behind the application's back.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        user_id,
        password,
        name,
        email,
    } = row;
    User::try_from_strings(user_id, password, name, email)
        .map_err(|err| UserPersistenceError::query(format!("stored user is invalid: {err}")))
}

fn write_row(user: &User) -> UserWrite<'_> {
    UserWrite {
        user_id: user.user_id().as_ref(),
        password: user.password().expose(),
        name: user.name().as_ref(),
        email: user.email().as_ref(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        diesel::insert_into(users::table)
            .values(&write_row(user))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert user", user.user_id().as_ref()))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let user_id = user.user_id().as_ref();
        let changed = diesel::update(users::table.filter(users::user_id.eq(user_id)))
            .set(&write_row(user))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update user", user_id))?;
        if changed == 0 {
            return Err(UserPersistenceError::missing(user_id));
        }
        Ok(())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row = users::table
            .filter(users::user_id.eq(user_id.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user", user_id.as_ref()))?;
        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::user_id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list users", ""))?;
        rows.into_iter().map(row_to_user).collect()
    }
}
