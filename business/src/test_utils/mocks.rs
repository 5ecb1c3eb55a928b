use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::model::FavoriteList;
use crate::domain::favorite::repository::FavoriteListRepository;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::CategoryFilter;
use crate::domain::seller::model::Seller;
use crate::domain::seller::repository::SellerRepository;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::{ProductId, ShopId, UserId};
use crate::domain::shop::errors::ShopError;
use crate::domain::shop::model::{NewShop, Shop};
use crate::domain::shop::repository::ShopRepository;
use crate::domain::shop::services::AuthenticationCodeGenerator;
use crate::domain::shop::use_cases::create::{CreateShopParams, CreateShopUseCase};

mock! {
    pub ShopRepo {}

    #[async_trait]
    impl ShopRepository for ShopRepo {
        async fn find_by_name_and_phone(&self, name: &str, phone: &str) -> Result<Option<Shop>, RepositoryError>;
        async fn find_by_id(&self, id: ShopId) -> Result<Option<Shop>, RepositoryError>;
        async fn insert(&self, shop: &NewShop) -> Result<Shop, RepositoryError>;
        async fn save(&self, shop: &Shop) -> Result<Shop, RepositoryError>;
        async fn find_enabled(&self, page: PageRequest) -> Result<Page<Shop>, RepositoryError>;
    }
}

mock! {
    pub SellerRepo {}

    #[async_trait]
    impl SellerRepository for SellerRepo {
        async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Seller>, RepositoryError>;
        async fn insert(&self, seller: &Seller) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn find_by_category(&self, filter: &CategoryFilter, page: PageRequest) -> Result<Page<Product>, RepositoryError>;
        async fn find_favorited_by_user(&self, user_id: UserId, page: PageRequest) -> Result<Page<Product>, RepositoryError>;
    }
}

mock! {
    pub FavoriteListRepo {}

    #[async_trait]
    impl FavoriteListRepository for FavoriteListRepo {
        async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<FavoriteList>, RepositoryError>;
        async fn create_for_user(&self, user_id: UserId) -> Result<FavoriteList, RepositoryError>;
        async fn save(&self, list: &FavoriteList) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CodeGenerator {}

    impl AuthenticationCodeGenerator for CodeGenerator {
        fn generate(&self) -> String;
    }
}

mock! {
    pub CreateShop {}

    #[async_trait]
    impl CreateShopUseCase for CreateShop {
        async fn execute(&self, params: CreateShopParams) -> Result<Shop, ShopError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn fixed_code_generator(code: &'static str) -> Arc<dyn AuthenticationCodeGenerator> {
    let mut generator = MockCodeGenerator::new();
    generator.expect_generate().returning(move || code.to_string());
    Arc::new(generator)
}
