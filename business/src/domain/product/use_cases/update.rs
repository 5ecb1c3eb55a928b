use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::value_objects::ProductStatus;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// Either a sale-status flip or a full rewrite of the listing.
pub enum ProductChange {
    Status(ProductStatus),
    Details(ProductDetails),
}

pub struct UpdateProductParams {
    pub id: ProductId,
    pub user_id: UserId,
    pub change: ProductChange,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
