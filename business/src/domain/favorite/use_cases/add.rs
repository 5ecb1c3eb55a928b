use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct AddFavoriteParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<(), FavoriteError>;
}
