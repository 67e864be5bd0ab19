//! Outbound adapters implementing the storage ports.
//!
//! - **persistence**: PostgreSQL repositories on Diesel.
//! - **memory**: process-local repositories for development and tests.
//!
//! Adapters only translate between domain types and storage rows; rules live
//! in the domain services.

pub mod memory;
pub mod persistence;
