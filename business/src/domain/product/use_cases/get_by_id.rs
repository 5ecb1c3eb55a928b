use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductView;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct GetProductByIdParams {
    pub id: ProductId,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<ProductView, ProductError>;
}
