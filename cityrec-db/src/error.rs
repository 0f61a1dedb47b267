//! Error types for cityrec-db.

use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

/// Database error type.
///
/// `RecordNotFound` and `RecordCreationFailure` are part of the call
/// contract; everything the store itself reports (connectivity loss,
/// constraint violations) passes through as `Sqlx` untranslated.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("record not found: city {id}")]
    RecordNotFound { id: i32 },

    #[error("insert returned no generated id")]
    RecordCreationFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_stable() {
        let err = DbError::RecordNotFound { id: 42 };
        assert_eq!(err.to_string(), "record not found: city 42");

        let err = DbError::RecordCreationFailure;
        assert_eq!(err.to_string(), "insert returned no generated id");
    }

    #[test]
    fn sqlx_errors_pass_through() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Sqlx(_)));
        assert!(err.to_string().starts_with("database error:"));
    }
}
