use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::seller::repository::SellerRepository;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// Loads an enabled product and checks the caller sells it.
pub(crate) async fn load_owned_product(
    products: &dyn ProductRepository,
    sellers: &dyn SellerRepository,
    product_id: ProductId,
    user_id: UserId,
) -> Result<Product, ProductError> {
    let product = products
        .find_by_id(product_id)
        .await?
        .filter(|product| product.is_enabled())
        .ok_or(ProductError::NotFound)?;

    let seller = sellers
        .find_by_user_id(user_id)
        .await?
        .ok_or(ProductError::NotSeller)?;

    if !product.belongs_to(seller.shop_id) {
        return Err(ProductError::UserMismatch);
    }

    Ok(product)
}
