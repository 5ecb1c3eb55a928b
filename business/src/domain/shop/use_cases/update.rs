use async_trait::async_trait;

use crate::domain::shared::value_objects::{ShopId, UserId};
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;

pub struct UpdateShopParams {
    pub id: ShopId,
    pub user_id: UserId,
    pub name: String,
    pub info: Option<String>,
    pub phone: String,
}

#[async_trait]
pub trait UpdateShopUseCase: Send + Sync {
    async fn execute(&self, params: UpdateShopParams) -> Result<Shop, ShopError>;
}
