use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::seller::errors::SellerError;
use crate::domain::seller::model::Seller;
use crate::domain::seller::repository::SellerRepository;
use crate::domain::seller::use_cases::register::{RegisterSellerParams, RegisterSellerUseCase};
use crate::domain::shop::model::{Shop, ShopDetails};
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::use_cases::create::{CreateShopParams, CreateShopUseCase};

/// Registers the caller's shop through the regular shop lifecycle, then links them to it.
///
/// When the link cannot be stored the shop is disabled again, so a retry
/// reactivates it instead of hitting `AlreadyExists`.
pub struct RegisterSellerUseCaseImpl {
    pub repository: Arc<dyn SellerRepository>,
    pub create_shop: Arc<dyn CreateShopUseCase>,
    pub shop_repository: Arc<dyn ShopRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterSellerUseCase for RegisterSellerUseCaseImpl {
    async fn execute(&self, params: RegisterSellerParams) -> Result<Shop, SellerError> {
        let details = ShopDetails::new(params.shop_name, params.shop_info, params.shop_phone)?;

        self.logger
            .info(&format!("Registering user {} as seller", params.user_id));

        if self
            .repository
            .find_by_user_id(params.user_id)
            .await?
            .is_some()
        {
            return Err(SellerError::AlreadyRegistered);
        }

        let shop = self
            .create_shop
            .execute(CreateShopParams {
                name: details.name,
                info: details.info,
                phone: details.phone,
            })
            .await?;

        if let Err(e) = self
            .repository
            .insert(&Seller::new(params.user_id, shop.id))
            .await
        {
            self.logger.warn(&format!(
                "Linking user {} to shop {} failed, disabling the shop",
                params.user_id, shop.id
            ));
            self.release_shop(shop).await;
            return Err(match e {
                RepositoryError::Duplicated => SellerError::AlreadyRegistered,
                other => SellerError::Repository(other),
            });
        }

        self.logger.info(&format!(
            "User {} is now seller of shop {}",
            params.user_id, shop.id
        ));
        Ok(shop)
    }
}

impl RegisterSellerUseCaseImpl {
    async fn release_shop(&self, mut shop: Shop) {
        shop.disable();
        if let Err(e) = self.shop_repository.save(&shop).await {
            self.logger
                .error(&format!("Could not disable unowned shop {}: {}", shop.id, e));
        }
    }
}
