//! PostgreSQL adapters for the storage ports.
//!
//! Connections come from a `bb8` pool of `diesel-async` connections. Row
//! structs and table definitions stay private to this module; repositories
//! translate rows into domain entities and Diesel failures into port errors.
//!
//! ```ignore
//! use cafe::outbound::persistence::{DbPool, DieselArticleRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cafe")).await?;
//! let articles = DieselArticleRepository::new(pool);
//! ```

mod diesel_article_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
