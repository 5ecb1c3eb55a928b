use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::{Page, PageRequest, Sort};
use business::domain::shared::value_objects::ShopId;
use business::domain::shop::model::{NewShop, Shop};
use business::domain::shop::repository::ShopRepository;

use super::entity::{SHOP_COLUMNS, ShopEntity};
use crate::error::repository_error;

pub struct ShopRepositoryPostgres {
    pool: PgPool,
}

impl ShopRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopRepository for ShopRepositoryPostgres {
    async fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Shop>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopEntity>(&format!(
            "SELECT {SHOP_COLUMNS} FROM shops WHERE name = $1 AND phone = $2"
        ))
        .bind(name)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopEntity>(&format!(
            "SELECT {SHOP_COLUMNS} FROM shops WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, shop: &NewShop) -> Result<Shop, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopEntity>(&format!(
            r#"INSERT INTO shops (name, info, phone, authentication_code)
            VALUES ($1, $2, $3, $4)
            RETURNING {SHOP_COLUMNS}"#
        ))
        .bind(&shop.details.name)
        .bind(&shop.details.info)
        .bind(&shop.details.phone)
        .bind(&shop.authentication_code)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, shop: &Shop) -> Result<Shop, RepositoryError> {
        let entity = sqlx::query_as::<_, ShopEntity>(&format!(
            r#"UPDATE shops SET
                name = $2,
                info = $3,
                phone = $4,
                enabled = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING {SHOP_COLUMNS}"#
        ))
        .bind(shop.id.value())
        .bind(&shop.name)
        .bind(&shop.info)
        .bind(&shop.phone)
        .bind(shop.enabled)
        .bind(shop.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.into_domain())
    }

    async fn find_enabled(&self, page: PageRequest) -> Result<Page<Shop>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShopEntity>(&format!(
            r#"SELECT {SHOP_COLUMNS} FROM shops
            WHERE enabled
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2"#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shops WHERE enabled")
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            page,
            total.max(0) as u64,
            Sort::created_at_desc(),
        ))
    }
}
