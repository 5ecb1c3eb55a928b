use chrono::Utc;

use crate::domain::favorite::model::{
    FavoriteList, FavoriteListId, FavoriteMarker, FavoriteMarkerId,
};
use crate::domain::product::model::{Product, ProductDetails, ProductImage};
use crate::domain::product::value_objects::ProductStatus;
use crate::domain::seller::model::Seller;
use crate::domain::shared::value_objects::{ProductId, ShopId, UserId};
use crate::domain::shop::model::Shop;

pub fn test_user_id() -> UserId {
    UserId::new(1)
}

pub fn shop(id: i64, enabled: bool) -> Shop {
    let now = Utc::now();
    Shop::from_repository(
        ShopId::new(id),
        "Vintage Corner".to_string(),
        Some("Used denim and outerwear".to_string()),
        "010-1234-5678".to_string(),
        "AB12CD34".to_string(),
        enabled,
        now,
        now,
    )
}

pub fn seller(user_id: UserId, shop_id: i64) -> Seller {
    Seller::new(user_id, ShopId::new(shop_id))
}

pub fn product_details() -> ProductDetails {
    ProductDetails {
        name: "Denim jacket".to_string(),
        brand_name: "Levi's".to_string(),
        size: "M".to_string(),
        price: 35000,
        description: "Worn twice, no stains".to_string(),
        main_category: "outer".to_string(),
        sub_category: Some("jacket".to_string()),
        images: vec![ProductImage::new("front.jpg".to_string(), 2048, None)],
    }
}

pub fn product(id: i64, shop_id: i64, enabled: bool) -> Product {
    let now = Utc::now();
    Product::from_repository(
        ProductId::new(id),
        ShopId::new(shop_id),
        product_details(),
        ProductStatus::Sell,
        enabled,
        now,
        now,
    )
}

/// A list for `user_id` with one marker per `(product, enabled)` entry.
pub fn favorite_list(user_id: UserId, markers: &[(i64, bool)]) -> FavoriteList {
    let now = Utc::now();
    let list_id = FavoriteListId::new(50);
    let markers = markers
        .iter()
        .map(|(product, enabled)| {
            FavoriteMarker::from_repository(
                FavoriteMarkerId {
                    favorite_list_id: list_id,
                    product_id: ProductId::new(*product),
                },
                *enabled,
                now,
                now,
            )
        })
        .collect();
    FavoriteList::from_repository(list_id, user_id, markers, now, now)
}
