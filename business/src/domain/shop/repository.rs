use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::ShopId;

use super::model::{NewShop, Shop};

#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Exact match on the `(name, phone)` uniqueness key, enabled or not.
    async fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Shop>, RepositoryError>;
    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when `(name, phone)` is taken.
    async fn insert(&self, shop: &NewShop) -> Result<Shop, RepositoryError>;
    async fn save(&self, shop: &Shop) -> Result<Shop, RepositoryError>;
    /// Enabled shops only, newest first.
    async fn find_enabled(&self, page: PageRequest) -> Result<Page<Shop>, RepositoryError>;
}
