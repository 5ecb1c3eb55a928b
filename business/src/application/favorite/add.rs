use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteListRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteListRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<(), FavoriteError> {
        self.logger.info(&format!(
            "User {} favoriting product {}",
            params.user_id, params.product_id
        ));

        self.product_repository
            .find_by_id(params.product_id)
            .await?
            .filter(|product| product.is_enabled())
            .ok_or(FavoriteError::ProductNotFound)?;

        let mut list = match self.repository.find_by_user_id(params.user_id).await? {
            Some(list) => list,
            None => {
                self.logger.debug(&format!(
                    "Creating favorite list for user {}",
                    params.user_id
                ));
                self.repository.create_for_user(params.user_id).await?
            }
        };

        list.add_product(params.product_id);
        self.repository.save(&list).await?;

        Ok(())
    }
}
