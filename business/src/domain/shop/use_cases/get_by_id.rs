use async_trait::async_trait;

use crate::domain::shared::value_objects::ShopId;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;

pub struct GetShopByIdParams {
    pub id: ShopId,
}

#[async_trait]
pub trait GetShopByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetShopByIdParams) -> Result<Shop, ShopError>;
}
