use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::{ProductId, UserId};

use super::model::{NewProduct, Product};
use super::value_objects::CategoryFilter;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the product with its enabled images, enabled or not.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Persists the row and replaces the stored image set.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Enabled products only, newest first.
    async fn find_by_category(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    /// Enabled products carrying an enabled favorite marker of the user, most
    /// recently favorited first.
    async fn find_favorited_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
}
