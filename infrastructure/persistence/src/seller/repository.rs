use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::seller::model::Seller;
use business::domain::seller::repository::SellerRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::SellerEntity;
use crate::error::repository_error;
use crate::user::ensure_user;

pub struct SellerRepositoryPostgres {
    pool: PgPool,
}

impl SellerRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for SellerRepositoryPostgres {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Seller>, RepositoryError> {
        let entity = sqlx::query_as::<_, SellerEntity>(
            "SELECT user_id, shop_id, created_at, updated_at FROM sellers WHERE user_id = $1",
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, seller: &Seller) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;
        ensure_user(&mut *tx, seller.user_id).await?;

        sqlx::query(
            r#"INSERT INTO sellers (user_id, shop_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(seller.user_id.value())
        .bind(seller.shop_id.value())
        .bind(seller.created_at)
        .bind(seller.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(repository_error)?;

        tx.commit().await.map_err(repository_error)?;
        Ok(())
    }
}
