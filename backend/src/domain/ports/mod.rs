//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by the domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod article_command;
mod article_query;
mod article_repository;
mod user_command;
mod user_repository;
mod users_query;

pub use article_command::{ArticleCommand, UpdateArticleRequest, WriteArticleRequest};
#[cfg(test)]
pub use article_command::MockArticleCommand;
pub use article_query::ArticleQuery;
#[cfg(test)]
pub use article_query::MockArticleQuery;
pub use article_repository::{ArticlePersistenceError, ArticleRepository};
#[cfg(test)]
pub use article_repository::MockArticleRepository;
pub use user_command::{LoginRequest, RegisterUserRequest, UpdateUserRequest, UserCommand};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
