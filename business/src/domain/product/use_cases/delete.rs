use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct DeleteProductParams {
    pub id: ProductId,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
