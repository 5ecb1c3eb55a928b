use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::{Product, ProductDetails, ProductImage};
use business::domain::product::value_objects::ProductStatus;
use business::domain::shared::value_objects::{ProductId, ShopId};

pub(crate) const PRODUCT_COLUMNS: &str = "p.id, p.shop_id, p.name, p.brand_name, p.size, p.price, \
     p.description, p.main_category, p.sub_category, p.status, p.enabled, p.created_at, p.updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    pub brand_name: String,
    pub size: String,
    pub price: i64,
    pub description: String,
    pub main_category: String,
    pub sub_category: Option<String>,
    pub status: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self, images: Vec<ProductImage>) -> Product {
        let details = ProductDetails {
            name: self.name,
            brand_name: self.brand_name,
            size: self.size,
            price: self.price,
            description: self.description,
            main_category: self.main_category,
            sub_category: self.sub_category,
            images,
        };
        Product::from_repository(
            ProductId::new(self.id),
            ShopId::new(self.shop_id),
            details,
            self.status
                .parse::<ProductStatus>()
                .unwrap_or(ProductStatus::Sell),
            self.enabled,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub product_id: i64,
    pub file_name: String,
    pub original_file_name: String,
    pub size: i64,
    pub temp_image_url: Option<String>,
}

impl ProductImageEntity {
    pub fn into_domain(self) -> ProductImage {
        ProductImage::from_repository(
            self.file_name,
            self.original_file_name,
            self.size,
            self.temp_image_url,
        )
    }
}
