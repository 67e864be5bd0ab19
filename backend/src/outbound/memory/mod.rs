//! Process-local adapters for the storage ports.
//!
//! Used when no database URL is configured and by integration tests. State
//! lives behind a `std::sync::Mutex` that is never held across an `.await`;
//! a poisoned lock is reported as a query failure.

mod articles;
mod users;

pub use articles::InMemoryArticleRepository;
pub use users::InMemoryUserRepository;
