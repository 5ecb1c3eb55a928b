use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Seller;

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Seller>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when the user is already linked.
    async fn insert(&self, seller: &Seller) -> Result<(), RepositoryError>;
}
