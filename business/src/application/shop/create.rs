use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::{NewShop, Shop, ShopDetails};
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::services::AuthenticationCodeGenerator;
use crate::domain::shop::use_cases::create::{CreateShopParams, CreateShopUseCase};

pub struct CreateShopUseCaseImpl {
    pub repository: Arc<dyn ShopRepository>,
    pub code_generator: Arc<dyn AuthenticationCodeGenerator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShopUseCase for CreateShopUseCaseImpl {
    async fn execute(&self, params: CreateShopParams) -> Result<Shop, ShopError> {
        let details = ShopDetails::new(params.name, params.info, params.phone)?;

        self.logger
            .info(&format!("Creating shop: {} ({})", details.name, details.phone));

        let existing = self
            .repository
            .find_by_name_and_phone(&details.name, &details.phone)
            .await?;

        match existing {
            None => {
                let new_shop = NewShop {
                    details,
                    authentication_code: self.code_generator.generate(),
                };
                let shop = self
                    .repository
                    .insert(&new_shop)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::Duplicated => ShopError::AlreadyExists,
                        other => ShopError::Repository(other),
                    })?;

                self.logger.info(&format!("Shop created with id: {}", shop.id));
                Ok(shop)
            }
            Some(shop) if shop.is_enabled() => {
                self.logger
                    .warn(&format!("Shop already exists with id: {}", shop.id));
                Err(ShopError::AlreadyExists)
            }
            Some(mut shop) => {
                shop.reactivate(details);
                let shop = self.repository.save(&shop).await?;

                self.logger
                    .info(&format!("Shop reactivated with id: {}", shop.id));
                Ok(shop)
            }
        }
    }
}
