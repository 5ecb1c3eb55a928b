use sqlx::PgConnection;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::error::repository_error;

/// Records a caller id taken from a verified token so rows owned by the user
/// can reference it. Callers whose row already exists are left untouched.
pub(crate) async fn ensure_user(
    conn: &mut PgConnection,
    user_id: UserId,
) -> Result<(), RepositoryError> {
    sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
        .bind(user_id.value())
        .execute(conn)
        .await
        .map_err(repository_error)?;
    Ok(())
}
