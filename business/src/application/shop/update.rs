use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::seller::repository::SellerRepository;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::{Shop, ShopDetails};
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::use_cases::update::{UpdateShopParams, UpdateShopUseCase};

pub struct UpdateShopUseCaseImpl {
    pub repository: Arc<dyn ShopRepository>,
    pub seller_repository: Arc<dyn SellerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShopUseCase for UpdateShopUseCaseImpl {
    async fn execute(&self, params: UpdateShopParams) -> Result<Shop, ShopError> {
        let details = ShopDetails::new(params.name, params.info, params.phone)?;

        self.logger.info(&format!("Updating shop: {}", params.id));

        let mut shop = self
            .repository
            .find_by_id(params.id)
            .await?
            .filter(|shop| shop.is_enabled())
            .ok_or(ShopError::NotFound)?;

        let seller = self
            .seller_repository
            .find_by_user_id(params.user_id)
            .await?;
        if !seller.is_some_and(|seller| seller.matches_shop(shop.id)) {
            self.logger.warn(&format!(
                "User {} is not a seller of shop {}",
                params.user_id, shop.id
            ));
            return Err(ShopError::UserMismatch);
        }

        shop.update(details);
        let shop = self.repository.save(&shop).await.map_err(|e| match e {
            RepositoryError::Duplicated => ShopError::AlreadyExists,
            other => ShopError::Repository(other),
        })?;

        self.logger.info(&format!("Shop updated: {}", shop.id));
        Ok(shop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{ShopId, UserId};
    use crate::test_utils::{
        MockSellerRepo, MockShopRepo, mock_logger, seller, shop, test_user_id,
    };

    fn params(id: i64) -> UpdateShopParams {
        UpdateShopParams {
            id: ShopId::new(id),
            user_id: test_user_id(),
            name: "Vintage Corner 2".to_string(),
            info: Some("Now with shoes".to_string()),
            phone: "010-1234-5678".to_string(),
        }
    }

    #[tokio::test]
    async fn should_update_shop_when_caller_is_its_seller() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), true))));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|s| Ok(s.clone()));

        let mut seller_repo = MockSellerRepo::new();
        seller_repo
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(seller(user_id, 3))));

        let use_case = UpdateShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(3)).await;

        assert!(result.is_ok());
        let shop = result.unwrap();
        assert_eq!(shop.name, "Vintage Corner 2");
        assert_eq!(shop.info.as_deref(), Some("Now with shoes"));
        assert_eq!(shop.authentication_code, "AB12CD34");
    }

    #[tokio::test]
    async fn should_forbid_update_when_seller_owns_another_shop() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), true))));
        mock_repo.expect_save().never();

        let mut seller_repo = MockSellerRepo::new();
        seller_repo
            .expect_find_by_user_id()
            .returning(|user_id| Ok(Some(seller(user_id, 4))));

        let use_case = UpdateShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(3)).await;

        assert!(matches!(result.unwrap_err(), ShopError::UserMismatch));
    }

    #[tokio::test]
    async fn should_forbid_update_when_caller_is_not_a_seller() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), true))));
        mock_repo.expect_save().never();

        let mut seller_repo = MockSellerRepo::new();
        seller_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = UpdateShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(seller_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateShopParams {
                user_id: UserId::new(77),
                ..params(3)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::UserMismatch));
    }

    #[tokio::test]
    async fn should_return_not_found_when_shop_disabled() {
        let mut mock_repo = MockShopRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(shop(id.value(), false))));

        let use_case = UpdateShopUseCaseImpl {
            repository: Arc::new(mock_repo),
            seller_repository: Arc::new(MockSellerRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(3)).await;

        assert!(matches!(result.unwrap_err(), ShopError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_when_phone_empty() {
        let use_case = UpdateShopUseCaseImpl {
            repository: Arc::new(MockShopRepo::new()),
            seller_repository: Arc::new(MockSellerRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateShopParams {
                phone: "".to_string(),
                ..params(3)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShopError::PhoneEmpty));
    }
}
