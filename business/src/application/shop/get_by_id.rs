use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::use_cases::get_by_id::{GetShopByIdParams, GetShopByIdUseCase};

pub struct GetShopByIdUseCaseImpl {
    pub repository: Arc<dyn ShopRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShopByIdUseCase for GetShopByIdUseCaseImpl {
    async fn execute(&self, params: GetShopByIdParams) -> Result<Shop, ShopError> {
        self.logger.info(&format!("Fetching shop: {}", params.id));

        self.repository
            .find_by_id(params.id)
            .await?
            .filter(|shop| shop.is_enabled())
            .ok_or(ShopError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ShopId;
    use crate::test_utils::{MockShopRepo, mock_logger, shop};

    #[tokio::test]
    async fn should_return_shop_when_enabled() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), true))));

        let use_case = GetShopByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShopByIdParams { id: ShopId::new(3) })
            .await;

        assert!(result.is_ok());
        let shop = result.unwrap();
        assert_eq!(shop.name, "Vintage Corner");
        assert_eq!(shop.authentication_code, "AB12CD34");
    }

    #[tokio::test]
    async fn should_treat_disabled_shop_as_missing() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), false))));

        let use_case = GetShopByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShopByIdParams { id: ShopId::new(3) })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetShopByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShopByIdParams { id: ShopId::new(3) })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::Repository(_)));
    }
}
