use async_trait::async_trait;

use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;

pub struct CreateShopParams {
    pub name: String,
    pub info: Option<String>,
    pub phone: String,
}

#[async_trait]
pub trait CreateShopUseCase: Send + Sync {
    async fn execute(&self, params: CreateShopParams) -> Result<Shop, ShopError>;
}
