use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteListRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError> {
        self.logger.info(&format!(
            "User {} unfavoriting product {}",
            params.user_id, params.product_id
        ));

        let mut list = self
            .repository
            .find_by_user_id(params.user_id)
            .await?
            .ok_or(FavoriteError::NotFound)?;

        list.remove_product(params.product_id)?;
        self.repository.save(&list).await?;

        Ok(())
    }
}
