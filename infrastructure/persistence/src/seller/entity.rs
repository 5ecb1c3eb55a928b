use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::seller::model::Seller;
use business::domain::shared::value_objects::{ShopId, UserId};

#[derive(Debug, FromRow)]
pub struct SellerEntity {
    pub user_id: i64,
    pub shop_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SellerEntity {
    pub fn into_domain(self) -> Seller {
        Seller::from_repository(
            UserId::new(self.user_id),
            ShopId::new(self.shop_id),
            self.created_at,
            self.updated_at,
        )
    }
}
