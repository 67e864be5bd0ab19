//! Translate pool and Diesel failures into port error constructors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Pool failures always mean the store is unreachable.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// A Diesel failure, already classified.
#[derive(Debug)]
pub(super) enum DieselFailure {
    UniqueViolation,
    Connection(String),
    Query(String),
}

pub(super) fn classify_diesel_error(error: DieselError, operation: &'static str) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        other => debug!(error = %other, operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection(format!("{operation}: database connection closed"))
        }
        DieselError::NotFound => DieselFailure::Query(format!("{operation}: record not found")),
        DieselError::QueryBuilderError(_) => {
            DieselFailure::Query(format!("{operation}: invalid query"))
        }
        _ => DieselFailure::Query(format!("{operation}: database error")),
    }
}
