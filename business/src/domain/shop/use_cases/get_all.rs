use async_trait::async_trait;

use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;

pub struct GetAllShopsParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait GetAllShopsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllShopsParams) -> Result<Page<Shop>, ShopError>;
}
