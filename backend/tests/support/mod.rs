//! Helpers shared by the PostgreSQL-backed integration suites.
//!
//! Each file under `tests/` is its own crate, so suites pull this module in
//! with `mod support;`.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::migrated_database;
