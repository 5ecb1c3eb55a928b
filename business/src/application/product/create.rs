use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::seller::repository::SellerRepository;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub seller_repository: Arc<dyn SellerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        params.details.validate()?;

        self.logger
            .info(&format!("Creating product: {}", params.details.name));

        let seller = self
            .seller_repository
            .find_by_user_id(params.user_id)
            .await?
            .ok_or(ProductError::NotSeller)?;

        let new_product = NewProduct::new(seller.shop_id, params.details)?;
        let product = self.repository.insert(&new_product).await?;

        self.logger.info(&format!(
            "Product created with id: {} in shop {}",
            product.id, product.shop_id
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductStatus;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_utils::{
        MockProductRepo, MockSellerRepo, mock_logger, product_details, seller, test_user_id,
    };

    fn stored(new_product: &NewProduct) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::new(100),
            new_product.shop_id,
            new_product.details.clone(),
            new_product.status,
            true,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_create_product_in_sellers_shop() {
        let mut seller_repo = MockSellerRepo::new();
        seller_repo
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(seller(user_id, 3))));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|p: &NewProduct| p.shop_id.value() == 3)
            .times(1)
            .returning(|p| Ok(stored(p)));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                user_id: test_user_id(),
                details: product_details(),
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.status, ProductStatus::Sell);
        assert_eq!(product.name, "Denim jacket");
        assert_eq!(product.images.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_caller_without_shop() {
        let mut seller_repo = MockSellerRepo::new();
        seller_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                user_id: test_user_id(),
                details: product_details(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotSeller));
    }

    #[tokio::test]
    async fn should_validate_before_looking_up_seller() {
        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            seller_repository: Arc::new(MockSellerRepo::new()),
            logger: mock_logger(),
        };

        let mut details = product_details();
        details.description = String::new();

        let result = use_case
            .execute(CreateProductParams {
                user_id: test_user_id(),
                details,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::RequiredFieldEmpty("description")
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut seller_repo = MockSellerRepo::new();
        seller_repo
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(seller(user_id, 3))));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                user_id: test_user_id(),
                details: product_details(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
