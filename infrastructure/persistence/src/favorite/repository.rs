use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteList;
use business::domain::favorite::repository::FavoriteListRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{FavoriteListEntity, FavoriteMarkerEntity};
use crate::error::repository_error;
use crate::user::ensure_user;

pub struct FavoriteListRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_markers(
        &self,
        list_id: i64,
    ) -> Result<Vec<FavoriteMarkerEntity>, RepositoryError> {
        sqlx::query_as::<_, FavoriteMarkerEntity>(
            r#"SELECT favorite_list_id, product_id, enabled, created_at, updated_at
            FROM favorite_markers
            WHERE favorite_list_id = $1
            ORDER BY created_at"#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)
    }
}

#[async_trait]
impl FavoriteListRepository for FavoriteListRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<FavoriteList>, RepositoryError> {
        let entity = sqlx::query_as::<_, FavoriteListEntity>(
            "SELECT id, user_id, created_at, updated_at FROM favorite_lists WHERE user_id = $1",
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        match entity {
            Some(entity) => {
                let markers = self.load_markers(entity.id).await?;
                Ok(Some(entity.into_domain(markers)))
            }
            None => Ok(None),
        }
    }

    async fn create_for_user(&self, user_id: UserId) -> Result<FavoriteList, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;
        ensure_user(&mut *tx, user_id).await?;

        // The no-op update makes RETURNING yield the row a concurrent request created.
        let entity = sqlx::query_as::<_, FavoriteListEntity>(
            r#"INSERT INTO favorite_lists (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, created_at, updated_at"#,
        )
        .bind(user_id.value())
        .fetch_one(&mut *tx)
        .await
        .map_err(repository_error)?;

        tx.commit().await.map_err(repository_error)?;

        let markers = self.load_markers(entity.id).await?;
        Ok(entity.into_domain(markers))
    }

    async fn save(&self, list: &FavoriteList) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;

        for marker in &list.markers {
            sqlx::query(
                r#"INSERT INTO favorite_markers (favorite_list_id, product_id, enabled, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (favorite_list_id, product_id) DO UPDATE SET
                    enabled = EXCLUDED.enabled,
                    updated_at = EXCLUDED.updated_at"#,
            )
            .bind(marker.id.favorite_list_id.value())
            .bind(marker.id.product_id.value())
            .bind(marker.enabled)
            .bind(marker.created_at)
            .bind(marker.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(repository_error)?;
        }

        sqlx::query("UPDATE favorite_lists SET updated_at = NOW() WHERE id = $1")
            .bind(list.id.value())
            .execute(&mut *tx)
            .await
            .map_err(repository_error)?;

        tx.commit().await.map_err(repository_error)?;
        Ok(())
    }
}
