use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Page;
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::Shop;
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::use_cases::get_all::{GetAllShopsParams, GetAllShopsUseCase};

pub struct GetAllShopsUseCaseImpl {
    pub repository: Arc<dyn ShopRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShopsUseCase for GetAllShopsUseCaseImpl {
    async fn execute(&self, params: GetAllShopsParams) -> Result<Page<Shop>, ShopError> {
        self.logger.info(&format!(
            "Fetching shops page {} (size {})",
            params.page.page, params.page.size
        ));

        let page = self.repository.find_enabled(params.page).await?;

        self.logger.info(&format!(
            "Found {} shops of {}",
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
