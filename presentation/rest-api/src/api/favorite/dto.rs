use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::shared::pagination::Page;

use crate::api::pagination::PageInfo;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct FavoriteProductPageResponse {
    pub content: Vec<ProductResponse>,
    #[oai(flatten)]
    pub page: PageInfo,
}

impl From<Page<Product>> for FavoriteProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let info = PageInfo::from(&page);
        Self {
            content: page.content.into_iter().map(|p| p.into()).collect(),
            page: info,
        }
    }
}
