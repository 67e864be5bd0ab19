//! Diesel row structs. Internal to the persistence adapter.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{articles, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

/// Insert and full-row update share one shape; `created_at` is left to the
/// column default.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserWrite<'a> {
    pub user_id: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArticleRow {
    pub id: i64,
    pub user_id: String,
    pub writer: String,
    pub title: String,
    pub contents: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub(crate) struct NewArticleRow<'a> {
    pub user_id: &'a str,
    pub writer: &'a str,
    pub title: &'a str,
    pub contents: &'a str,
    pub created_at: NaiveDateTime,
}

/// Editable article columns. `id` and `created_at` are never rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = articles)]
pub(crate) struct ArticleUpdate<'a> {
    pub user_id: &'a str,
    pub writer: &'a str,
    pub title: &'a str,
    pub contents: &'a str,
}
