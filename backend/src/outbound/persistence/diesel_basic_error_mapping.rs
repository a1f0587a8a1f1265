//! Diesel and pool error mapping for the café repository.

use tracing::debug;

use crate::domain::ports::CafeRepositoryError;

use super::pool::PoolError;

/// Map pool failures onto connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> CafeRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CafeRepositoryError::connection(message)
        }
    }
}

/// Map Diesel failures onto query or connection errors.
///
/// SQLite reports a dropped file handle as a closed connection; everything
/// else, including row conversion failures from a drifted schema, is a query
/// error.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> CafeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            CafeRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => CafeRepositoryError::query(info.message()),
        DieselError::DeserializationError(err) => {
            CafeRepositoryError::query(format!("row conversion failed: {err}"))
        }
        other => CafeRepositoryError::query(other.to_string()),
    }
}
