use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{
    ProductChange, UpdateProductParams, UpdateProductUseCase,
};
use crate::domain::seller::repository::SellerRepository;

use super::ownership::load_owned_product;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub seller_repository: Arc<dyn SellerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        if let ProductChange::Details(details) = &params.change {
            details.validate()?;
        }

        self.logger.info(&format!("Updating product: {}", params.id));

        let mut product = load_owned_product(
            self.repository.as_ref(),
            self.seller_repository.as_ref(),
            params.id,
            params.user_id,
        )
        .await?;

        match params.change {
            ProductChange::Status(status) => {
                self.logger
                    .debug(&format!("Product {} status -> {}", product.id, status));
                product.change_status(status);
            }
            ProductChange::Details(details) => product.apply_details(details),
        }

        let product = self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
