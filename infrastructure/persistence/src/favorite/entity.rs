use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::favorite::model::{
    FavoriteList, FavoriteListId, FavoriteMarker, FavoriteMarkerId,
};
use business::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, FromRow)]
pub struct FavoriteListEntity {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteListEntity {
    pub fn into_domain(self, markers: Vec<FavoriteMarkerEntity>) -> FavoriteList {
        FavoriteList::from_repository(
            FavoriteListId::new(self.id),
            UserId::new(self.user_id),
            markers.into_iter().map(|m| m.into_domain()).collect(),
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct FavoriteMarkerEntity {
    pub favorite_list_id: i64,
    pub product_id: i64,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteMarkerEntity {
    pub fn into_domain(self) -> FavoriteMarker {
        FavoriteMarker::from_repository(
            FavoriteMarkerId {
                favorite_list_id: FavoriteListId::new(self.favorite_list_id),
                product_id: ProductId::new(self.product_id),
            },
            self.enabled,
            self.created_at,
            self.updated_at,
        )
    }
}
