use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::get_all::{
    GetFavoriteProductsParams, GetFavoriteProductsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::pagination::Page;

/// Pages through the caller's favorited products that are still listed.
pub struct GetFavoriteProductsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoriteProductsUseCase for GetFavoriteProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFavoriteProductsParams,
    ) -> Result<Page<Product>, FavoriteError> {
        self.logger.info(&format!(
            "Fetching favorites of user {} page {}",
            params.user_id, params.page.page
        ));

        let page = self
            .product_repository
            .find_favorited_by_user(params.user_id, params.page)
            .await?;

        self.logger.debug(&format!(
            "User {} has {} favorites",
            params.user_id, page.total_elements
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::pagination::{PageRequest, Sort};
    use crate::test_utils::{MockProductRepo, mock_logger, product, test_user_id};

    #[tokio::test]
    async fn should_return_favorited_products_page() {
        let mut products = MockProductRepo::new();
        products
            .expect_find_favorited_by_user()
            .withf(|user_id, request| *user_id == test_user_id() && request.page == 1)
            .returning(|_, request| {
                Ok(Page::new(
                    vec![product(9, 3, true)],
                    request,
                    21,
                    Sort::created_at_desc(),
                ))
            });

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetFavoriteProductsParams {
                user_id: test_user_id(),
                page: PageRequest::new(1, 20),
            })
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut products = MockProductRepo::new();
        products
            .expect_find_favorited_by_user()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = GetFavoriteProductsUseCaseImpl {
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetFavoriteProductsParams {
                user_id: test_user_id(),
                page: PageRequest::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), FavoriteError::Repository(_)));
    }
}
