use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest, Sort};
use crate::domain::shared::value_objects::ShopId;
use crate::domain::shop::model::{NewShop, Shop};
use crate::domain::shop::repository::ShopRepository;

/// Shop store keeping rows in memory, unique on `(name, phone)` like the real table.
#[derive(Default)]
pub struct InMemoryShopRepository {
    shops: Mutex<Vec<Shop>>,
}

impl InMemoryShopRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shop(self, shop: Shop) -> Self {
        self.shops.lock().unwrap().push(shop);
        self
    }

    pub fn rows(&self) -> Vec<Shop> {
        self.shops.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShopRepository for InMemoryShopRepository {
    async fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Shop>, RepositoryError> {
        let shops = self.shops.lock().unwrap();
        Ok(shops
            .iter()
            .find(|shop| shop.name == name && shop.phone == phone)
            .cloned())
    }

    async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, RepositoryError> {
        let shops = self.shops.lock().unwrap();
        Ok(shops.iter().find(|shop| shop.id == id).cloned())
    }

    async fn insert(&self, shop: &NewShop) -> Result<Shop, RepositoryError> {
        let mut shops = self.shops.lock().unwrap();
        if shops
            .iter()
            .any(|s| s.name == shop.details.name && s.phone == shop.details.phone)
        {
            return Err(RepositoryError::Duplicated);
        }

        let id = shops.iter().map(|s| s.id.value()).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let stored = Shop::from_repository(
            ShopId::new(id),
            shop.details.name.clone(),
            shop.details.info.clone(),
            shop.details.phone.clone(),
            shop.authentication_code.clone(),
            true,
            now,
            now,
        );
        shops.push(stored.clone());
        Ok(stored)
    }

    async fn save(&self, shop: &Shop) -> Result<Shop, RepositoryError> {
        let mut shops = self.shops.lock().unwrap();
        let row = shops
            .iter_mut()
            .find(|s| s.id == shop.id)
            .ok_or(RepositoryError::DatabaseError)?;
        *row = shop.clone();
        Ok(shop.clone())
    }

    async fn find_enabled(&self, page: PageRequest) -> Result<Page<Shop>, RepositoryError> {
        let shops = self.shops.lock().unwrap();
        let mut enabled: Vec<Shop> = shops.iter().filter(|s| s.enabled).cloned().collect();
        enabled.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = enabled.len() as u64;
        let content = enabled
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(content, page, total, Sort::created_at_desc()))
    }
}
