use business::domain::errors::RepositoryError;

/// Maps a driver error onto the port error, keeping unique violations distinct.
pub(crate) fn repository_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            tracing::debug!("Unique constraint violated: {:?}", db_error.constraint());
            return RepositoryError::Duplicated;
        }
    }
    tracing::error!("Database error: {}", error);
    RepositoryError::DatabaseError
}
