use async_trait::async_trait;

use crate::domain::shared::value_objects::ShopId;
use crate::domain::shop::errors::ShopError;

pub struct DeleteShopParams {
    pub id: ShopId,
}

#[async_trait]
pub trait DeleteShopUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShopParams) -> Result<(), ShopError>;
}
