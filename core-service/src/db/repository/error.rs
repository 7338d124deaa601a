use diesel::r2d2;
use diesel::result::DatabaseErrorKind;
use shared::{AppError, GENERIC_VALIDATION_ERROR};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

impl RepositoryError {
    /// True when the database rejected a write because of the data itself.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }
}

impl From<r2d2::PoolError> for RepositoryError {
    fn from(e: r2d2::PoolError) -> Self {
        RepositoryError::Pool(e.to_string())
    }
}

impl From<tokio::task::JoinError> for RepositoryError {
    fn from(e: tokio::task::JoinError) -> Self {
        RepositoryError::TaskJoin(e.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        if e.is_constraint_violation() {
            return AppError::validation(GENERIC_VALIDATION_ERROR);
        }
        AppError::Database(e.to_string())
    }
}
