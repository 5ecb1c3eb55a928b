use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::ShopId;
use business::domain::shop::model::Shop;

pub(crate) const SHOP_COLUMNS: &str =
    "id, name, info, phone, authentication_code, enabled, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ShopEntity {
    pub id: i64,
    pub name: String,
    pub info: Option<String>,
    pub phone: String,
    pub authentication_code: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShopEntity {
    pub fn into_domain(self) -> Shop {
        Shop::from_repository(
            ShopId::new(self.id),
            self.name,
            self.info,
            self.phone,
            self.authentication_code,
            self.enabled,
            self.created_at,
            self.updated_at,
        )
    }
}
