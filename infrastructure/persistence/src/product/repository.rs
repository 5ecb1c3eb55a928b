use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductImage};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::CategoryFilter;
use business::domain::shared::pagination::{Page, PageRequest, Sort};
use business::domain::shared::value_objects::{ProductId, UserId};

use super::entity::{PRODUCT_COLUMNS, ProductEntity, ProductImageEntity};
use crate::error::repository_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Enabled images of every given product, keyed by product id, in upload order.
    async fn load_images(
        &self,
        product_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ProductImage>>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = sqlx::query_as::<_, ProductImageEntity>(
            r#"SELECT product_id, file_name, original_file_name, size, temp_image_url
            FROM product_images
            WHERE product_id = ANY($1) AND enabled
            ORDER BY id"#,
        )
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let mut images: HashMap<i64, Vec<ProductImage>> = HashMap::new();
        for entity in entities {
            images
                .entry(entity.product_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(images)
    }

    async fn with_images(
        &self,
        entities: Vec<ProductEntity>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut images = self.load_images(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let product_images = images.remove(&e.id).unwrap_or_default();
                e.into_domain(product_images)
            })
            .collect())
    }
}

/// Disables stored images missing from `images` and upserts the rest.
async fn replace_images(
    conn: &mut PgConnection,
    product_id: i64,
    images: &[ProductImage],
) -> Result<(), RepositoryError> {
    let kept: Vec<&str> = images.iter().map(|i| i.file_name.as_str()).collect();

    sqlx::query(
        r#"UPDATE product_images SET enabled = FALSE, updated_at = NOW()
        WHERE product_id = $1 AND enabled AND NOT (file_name = ANY($2))"#,
    )
    .bind(product_id)
    .bind(&kept)
    .execute(&mut *conn)
    .await
    .map_err(repository_error)?;

    for image in images {
        sqlx::query(
            r#"INSERT INTO product_images (product_id, file_name, original_file_name, size, temp_image_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (file_name) DO UPDATE SET
                enabled = TRUE,
                updated_at = NOW()
            WHERE product_images.product_id = EXCLUDED.product_id"#,
        )
        .bind(product_id)
        .bind(&image.file_name)
        .bind(&image.original_file_name)
        .bind(image.size)
        .bind(&image.temp_image_url)
        .execute(&mut *conn)
        .await
        .map_err(repository_error)?;
    }

    Ok(())
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        match entity {
            Some(entity) => Ok(self.with_images(vec![entity]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;
        let details = &product.details;

        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products AS p (shop_id, name, brand_name, size, price, description, main_category, sub_category, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(product.shop_id.value())
        .bind(&details.name)
        .bind(&details.brand_name)
        .bind(&details.size)
        .bind(details.price)
        .bind(&details.description)
        .bind(&details.main_category)
        .bind(&details.sub_category)
        .bind(product.status.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(repository_error)?;

        replace_images(&mut *tx, entity.id, &details.images).await?;
        tx.commit().await.map_err(repository_error)?;

        Ok(entity.into_domain(details.images.clone()))
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;

        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products AS p SET
                name = $2,
                brand_name = $3,
                size = $4,
                price = $5,
                description = $6,
                main_category = $7,
                sub_category = $8,
                status = $9,
                enabled = $10,
                updated_at = $11
            WHERE p.id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(product.id.value())
        .bind(&product.name)
        .bind(&product.brand_name)
        .bind(&product.size)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.main_category)
        .bind(&product.sub_category)
        .bind(product.status.to_string())
        .bind(product.enabled)
        .bind(product.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(repository_error)?;

        replace_images(&mut *tx, entity.id, &product.images).await?;
        tx.commit().await.map_err(repository_error)?;

        Ok(entity.into_domain(product.images.clone()))
    }

    async fn find_by_category(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let condition = "p.enabled AND p.main_category = $1 \
             AND ($2::VARCHAR IS NULL OR p.sub_category = $2)";

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"SELECT {PRODUCT_COLUMNS} FROM products p
            WHERE {condition}
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $3 OFFSET $4"#
        ))
        .bind(&filter.main_category)
        .bind(&filter.sub_category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM products p WHERE {condition}"))
                .bind(&filter.main_category)
                .bind(&filter.sub_category)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(Page::new(
            self.with_images(entities).await?,
            page,
            total.max(0) as u64,
            Sort::created_at_desc(),
        ))
    }

    async fn find_favorited_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let from = r#"FROM products p
            JOIN favorite_markers m ON m.product_id = p.id AND m.enabled
            JOIN favorite_lists l ON l.id = m.favorite_list_id
            WHERE l.user_id = $1 AND p.enabled"#;

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"SELECT {PRODUCT_COLUMNS} {from}
            ORDER BY m.updated_at DESC, p.id DESC
            LIMIT $2 OFFSET $3"#
        ))
        .bind(user_id.value())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) {from}"))
            .bind(user_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(Page::new(
            self.with_images(entities).await?,
            page,
            total.max(0) as u64,
            Sort::favorited_at_desc(),
        ))
    }
}
