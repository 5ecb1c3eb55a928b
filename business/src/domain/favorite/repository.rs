use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::FavoriteList;

#[async_trait]
pub trait FavoriteListRepository: Send + Sync {
    /// Loads the list with all of its markers, disabled ones included.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<FavoriteList>, RepositoryError>;
    /// Returns the user's existing list if one was created concurrently.
    async fn create_for_user(&self, user_id: UserId) -> Result<FavoriteList, RepositoryError>;
    /// Upserts every marker in one transaction.
    async fn save(&self, list: &FavoriteList) -> Result<(), RepositoryError>;
}
