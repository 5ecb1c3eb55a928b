use async_trait::async_trait;

use crate::domain::seller::errors::SellerError;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shop::model::Shop;

pub struct RegisterSellerParams {
    pub user_id: UserId,
    pub shop_name: String,
    pub shop_info: Option<String>,
    pub shop_phone: String,
}

#[async_trait]
pub trait RegisterSellerUseCase: Send + Sync {
    async fn execute(&self, params: RegisterSellerParams) -> Result<Shop, SellerError>;
}
