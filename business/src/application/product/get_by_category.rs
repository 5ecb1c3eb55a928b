use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::repository::FavoriteListRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductView;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use crate::domain::product::value_objects::CategoryFilter;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::is_blank;

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub favorite_repository: Arc<dyn FavoriteListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Page<ProductView>, ProductError> {
        if is_blank(&params.main_category) {
            return Err(ProductError::CategoryRequired);
        }

        let filter = CategoryFilter {
            main_category: params.main_category.trim().to_string(),
            sub_category: params
                .sub_category
                .map(|sub| sub.trim().to_string())
                .filter(|sub| !sub.is_empty()),
        };

        self.logger.info(&format!(
            "Fetching products in {}/{} page {}",
            filter.main_category,
            filter.sub_category.as_deref().unwrap_or("*"),
            params.page.page
        ));

        let page = self
            .repository
            .find_by_category(&filter, params.page)
            .await?;

        let favorites: HashSet<_> = self
            .favorite_repository
            .find_by_user_id(params.user_id)
            .await?
            .map(|list| list.favorited_product_ids().into_iter().collect())
            .unwrap_or_default();

        Ok(page.map(|product| ProductView {
            favorited: favorites.contains(&product.id),
            product,
        }))
    }
}
