use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::use_cases::delete::{DeleteShopParams, DeleteShopUseCase};

pub struct DeleteShopUseCaseImpl {
    pub repository: Arc<dyn ShopRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShopUseCase for DeleteShopUseCaseImpl {
    async fn execute(&self, params: DeleteShopParams) -> Result<(), ShopError> {
        self.logger.info(&format!("Deleting shop: {}", params.id));

        // Deleting an already deleted shop is NotFound, not a no-op.
        let mut shop = self
            .repository
            .find_by_id(params.id)
            .await?
            .filter(|shop| shop.is_enabled())
            .ok_or(ShopError::NotFound)?;

        shop.disable();
        self.repository.save(&shop).await?;

        self.logger.info(&format!("Shop disabled: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ShopId;
    use crate::domain::shop::model::Shop;
    use crate::test_utils::{InMemoryShopRepository, MockShopRepo, mock_logger, shop};

    #[tokio::test]
    async fn should_soft_delete_enabled_shop() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), true))));
        mock_repo
            .expect_save()
            .withf(|s: &Shop| !s.enabled)
            .times(1)
            .returning(|s| Ok(s.clone()));

        let use_case = DeleteShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShopParams { id: ShopId::new(3) })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let repository = Arc::new(InMemoryShopRepository::new().with_shop(shop(3, true)));
        let use_case = DeleteShopUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(DeleteShopParams { id: ShopId::new(3) })
            .await
            .unwrap();
        let result = use_case
            .execute(DeleteShopParams { id: ShopId::new(3) })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::NotFound));
        assert_eq!(repository.rows().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_shop_missing() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = DeleteShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShopParams { id: ShopId::new(404) })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::NotFound));
    }
}
