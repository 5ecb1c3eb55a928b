use std::sync::Arc;

use logger::TracingLogger;
use persistence::favorite::repository::FavoriteListRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::seller::repository::SellerRepositoryPostgres;
use persistence::shop::repository::ShopRepositoryPostgres;

use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::get_all::GetFavoriteProductsUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::seller::register::RegisterSellerUseCaseImpl;
use business::application::shop::code_generator::RandomAuthenticationCodeGenerator;
use business::application::shop::create::CreateShopUseCaseImpl;
use business::application::shop::delete::DeleteShopUseCaseImpl;
use business::application::shop::get_all::GetAllShopsUseCaseImpl;
use business::application::shop::get_by_id::GetShopByIdUseCaseImpl;
use business::application::shop::update::UpdateShopUseCaseImpl;

use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::seller::routes::SellerApi;
use crate::api::shop::routes::ShopApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shop_api: ShopApi,
    pub seller_api: SellerApi,
    pub product_api: ProductApi,
    pub favorite_api: FavoriteApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let shop_repository = Arc::new(ShopRepositoryPostgres::new(pool.clone()));
        let seller_repository = Arc::new(SellerRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteListRepositoryPostgres::new(pool));

        // Shop use cases
        let create_shop_use_case = Arc::new(CreateShopUseCaseImpl {
            repository: shop_repository.clone(),
            code_generator: Arc::new(RandomAuthenticationCodeGenerator),
            logger: logger.clone(),
        });
        let get_all_shops_use_case = Arc::new(GetAllShopsUseCaseImpl {
            repository: shop_repository.clone(),
            logger: logger.clone(),
        });
        let get_shop_by_id_use_case = Arc::new(GetShopByIdUseCaseImpl {
            repository: shop_repository.clone(),
            logger: logger.clone(),
        });
        let update_shop_use_case = Arc::new(UpdateShopUseCaseImpl {
            repository: shop_repository.clone(),
            seller_repository: seller_repository.clone(),
            logger: logger.clone(),
        });
        let delete_shop_use_case = Arc::new(DeleteShopUseCaseImpl {
            repository: shop_repository.clone(),
            logger: logger.clone(),
        });

        // Seller use cases
        let register_seller_use_case = Arc::new(RegisterSellerUseCaseImpl {
            repository: seller_repository.clone(),
            create_shop: create_shop_use_case.clone(),
            shop_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            seller_repository: seller_repository.clone(),
            logger: logger.clone(),
        });
        let get_products_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            favorite_repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            favorite_repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            seller_repository: seller_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            seller_repository,
            logger: logger.clone(),
        });

        // Favorite use cases
        let add_favorite_use_case = Arc::new(AddFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_favorite_use_case = Arc::new(RemoveFavoriteUseCaseImpl {
            repository: favorite_repository,
            logger: logger.clone(),
        });
        let get_favorites_use_case = Arc::new(GetFavoriteProductsUseCaseImpl {
            product_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            shop_api: ShopApi::new(
                create_shop_use_case,
                get_all_shops_use_case,
                get_shop_by_id_use_case,
                update_shop_use_case,
                delete_shop_use_case,
            ),
            seller_api: SellerApi::new(register_seller_use_case),
            product_api: ProductApi::new(
                create_product_use_case,
                get_products_by_category_use_case,
                get_product_by_id_use_case,
                update_product_use_case,
                delete_product_use_case,
            ),
            favorite_api: FavoriteApi::new(
                add_favorite_use_case,
                remove_favorite_use_case,
                get_favorites_use_case,
            ),
        }
    }
}
