//! sqlx error translation shared by the Postgres repositories.

use crate::domain::foundation::{DomainError, ErrorCode};

/// SQLSTATE for "relation does not exist".
const UNDEFINED_TABLE: &str = "42P01";

/// Message shown while the schema has not been migrated yet.
pub const STORE_NOT_READY_MESSAGE: &str =
    "System is initializing. Please try again in a few minutes.";

/// Maps a sqlx error to a domain error, tagging it with what was attempted.
pub(crate) fn db_error(action: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNDEFINED_TABLE) {
            tracing::warn!(action, error = %db_err, "store schema not ready");
            return DomainError::new(ErrorCode::StoreNotReady, STORE_NOT_READY_MESSAGE);
        }
    }
    DomainError::database(format!("Failed to {}: {}", action, err))
}

/// True if `err` violated the named unique constraint.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// Rejects an update that touched no row.
pub(crate) fn ensure_updated(
    rows_affected: u64,
    code: ErrorCode,
    message: &str,
) -> Result<(), DomainError> {
    if rows_affected == 0 {
        Err(DomainError::new(code, message))
    } else {
        Ok(())
    }
}

/// Decodes a stored enum string, reporting corrupt rows as database errors.
pub(crate) fn parse_column<T>(
    column: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, DomainError> {
    parse(raw).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} value: {}", column, raw),
        )
    })
}
