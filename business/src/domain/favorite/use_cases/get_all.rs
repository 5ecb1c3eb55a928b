use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

pub struct GetFavoriteProductsParams {
    pub user_id: UserId,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetFavoriteProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFavoriteProductsParams,
    ) -> Result<Page<Product>, FavoriteError>;
}
