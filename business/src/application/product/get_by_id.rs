use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::repository::FavoriteListRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductView;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub favorite_repository: Arc<dyn FavoriteListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductView, ProductError> {
        self.logger.info(&format!("Fetching product: {}", params.id));

        let product = self
            .repository
            .find_by_id(params.id)
            .await?
            .filter(|product| product.is_enabled())
            .ok_or(ProductError::NotFound)?;

        let favorited = self
            .favorite_repository
            .find_by_user_id(params.user_id)
            .await?
            .is_some_and(|list| list.is_favorited(product.id));

        Ok(ProductView { product, favorited })
    }
}
