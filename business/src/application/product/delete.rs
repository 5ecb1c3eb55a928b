use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::seller::repository::SellerRepository;

use super::ownership::load_owned_product;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub seller_repository: Arc<dyn SellerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger.info(&format!("Deleting product: {}", params.id));

        let mut product = load_owned_product(
            self.repository.as_ref(),
            self.seller_repository.as_ref(),
            params.id,
            params.user_id,
        )
        .await?;

        product.disable();
        self.repository.save(&product).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_utils::{
        MockProductRepo, MockSellerRepo, mock_logger, product, seller, test_user_id,
    };

    #[tokio::test]
    async fn should_soft_delete_owned_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id.value(), 3, true))));
        mock_repo
            .expect_save()
            .withf(|p: &Product| !p.enabled && p.id == ProductId::new(100))
            .times(1)
            .returning(|p| Ok(p.clone()));

        let mut seller_repo = MockSellerRepo::new();
        seller_repo
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(seller(user_id, 3))));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(100),
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_already_deleted() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id.value(), 3, false))));
        mock_repo.expect_save().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(MockSellerRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(100),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_caller_without_shop() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id.value(), 3, true))));
        mock_repo.expect_save().never();

        let mut seller_repo = MockSellerRepo::new();
        seller_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(100),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotSeller));
    }
}
