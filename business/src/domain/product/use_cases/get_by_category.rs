use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductView;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::UserId;

pub struct GetProductsByCategoryParams {
    pub user_id: UserId,
    pub main_category: String,
    pub sub_category: Option<String>,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Page<ProductView>, ProductError>;
}
