use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shared::pagination::Page;
use business::domain::shop::model::Shop;

use crate::api::pagination::PageInfo;

#[derive(Debug, Clone, Object)]
pub struct CreateShopRequest {
    /// Shop name (cannot be empty)
    pub name: String,
    /// Free-form shop description
    #[oai(skip_serializing_if_is_none)]
    pub info: Option<String>,
    /// Contact phone (cannot be empty)
    pub phone: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateShopRequest {
    /// Shop name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub info: Option<String>,
    /// Contact phone (cannot be empty)
    pub phone: String,
}

#[derive(Debug, Clone, Object)]
pub struct ShopResponse {
    pub id: i64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub info: Option<String>,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        Self {
            id: shop.id.value(),
            name: shop.name,
            info: shop.info,
            phone: shop.phone,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        }
    }
}

/// Returned only to whoever registers the shop; carries its authentication code.
#[derive(Debug, Clone, Object)]
pub struct RegisteredShopResponse {
    #[oai(flatten)]
    pub shop: ShopResponse,
    /// Code issued once when the shop is first registered
    pub authentication_code: String,
}

impl From<Shop> for RegisteredShopResponse {
    fn from(shop: Shop) -> Self {
        let authentication_code = shop.authentication_code.clone();
        Self {
            shop: shop.into(),
            authentication_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShopPageResponse {
    pub content: Vec<ShopResponse>,
    #[oai(flatten)]
    pub page: PageInfo,
}

impl From<Page<Shop>> for ShopPageResponse {
    fn from(page: Page<Shop>) -> Self {
        let info = PageInfo::from(&page);
        Self {
            content: page.content.into_iter().map(|s| s.into()).collect(),
            page: info,
        }
    }
}
