use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductDetails, ProductImage, ProductView};
use business::domain::product::use_cases::update::ProductChange;
use business::domain::product::value_objects::ProductStatus;
use business::domain::shared::pagination::Page;

use crate::api::pagination::PageInfo;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "sell")]
    Sell,
    #[oai(rename = "sold_out")]
    SoldOut,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Sell => ProductStatusDto::Sell,
            ProductStatus::SoldOut => ProductStatusDto::SoldOut,
        }
    }
}

impl From<ProductStatusDto> for ProductStatus {
    fn from(dto: ProductStatusDto) -> Self {
        match dto {
            ProductStatusDto::Sell => ProductStatus::Sell,
            ProductStatusDto::SoldOut => ProductStatus::SoldOut,
        }
    }
}

/// An image already uploaded to temporary storage
#[derive(Debug, Clone, Object)]
pub struct ProductImageRequest {
    pub original_file_name: String,
    /// Size in bytes
    pub size: i64,
    #[oai(skip_serializing_if_is_none)]
    pub temp_image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductDetailsRequest {
    pub name: String,
    pub brand_name: String,
    pub size: String,
    /// Price in the smallest currency unit (cannot be negative)
    pub price: i64,
    pub description: String,
    pub main_category: String,
    #[oai(skip_serializing_if_is_none)]
    pub sub_category: Option<String>,
    /// At least one image
    pub images: Vec<ProductImageRequest>,
}

impl From<ProductDetailsRequest> for ProductDetails {
    fn from(request: ProductDetailsRequest) -> Self {
        Self {
            name: request.name,
            brand_name: request.brand_name,
            size: request.size,
            price: request.price,
            description: request.description,
            main_category: request.main_category,
            sub_category: request.sub_category,
            images: request
                .images
                .into_iter()
                .map(|image| {
                    ProductImage::new(image.original_file_name, image.size, image.temp_image_url)
                })
                .collect(),
        }
    }
}

/// Either `status` alone or `details` alone.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<ProductStatusDto>,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<ProductDetailsRequest>,
}

impl UpdateProductRequest {
    pub fn into_change(self) -> Option<ProductChange> {
        match (self.status, self.details) {
            (Some(status), None) => Some(ProductChange::Status(status.into())),
            (None, Some(details)) => Some(ProductChange::Details(details.into())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductImageResponse {
    pub file_name: String,
    pub original_file_name: String,
    pub size: i64,
    #[oai(skip_serializing_if_is_none)]
    pub temp_image_url: Option<String>,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            file_name: image.file_name,
            original_file_name: image.original_file_name,
            size: image.size,
            temp_image_url: image.temp_image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    pub shop_id: i64,
    pub name: String,
    pub brand_name: String,
    pub size: String,
    pub price: i64,
    pub description: String,
    pub main_category: String,
    #[oai(skip_serializing_if_is_none)]
    pub sub_category: Option<String>,
    pub status: ProductStatusDto,
    pub images: Vec<ProductImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            shop_id: product.shop_id.value(),
            name: product.name,
            brand_name: product.brand_name,
            size: product.size,
            price: product.price,
            description: product.description,
            main_category: product.main_category,
            sub_category: product.sub_category,
            status: product.status.into(),
            images: product.images.into_iter().map(|i| i.into()).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// A product plus whether the caller has favorited it
#[derive(Debug, Clone, Object)]
pub struct ProductViewResponse {
    #[oai(flatten)]
    pub product: ProductResponse,
    pub favorited: bool,
}

impl From<ProductView> for ProductViewResponse {
    fn from(view: ProductView) -> Self {
        Self {
            product: view.product.into(),
            favorited: view.favorited,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub content: Vec<ProductViewResponse>,
    #[oai(flatten)]
    pub page: PageInfo,
}

impl From<Page<ProductView>> for ProductPageResponse {
    fn from(page: Page<ProductView>) -> Self {
        let info = PageInfo::from(&page);
        Self {
            content: page.content.into_iter().map(|v| v.into()).collect(),
            page: info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ProductDetailsRequest {
        ProductDetailsRequest {
            name: "Denim jacket".to_string(),
            brand_name: "Levi's".to_string(),
            size: "M".to_string(),
            price: 35000,
            description: "Worn twice".to_string(),
            main_category: "outer".to_string(),
            sub_category: None,
            images: vec![ProductImageRequest {
                original_file_name: "front.PNG".to_string(),
                size: 1024,
                temp_image_url: Some("https://tmp.example/front.PNG".to_string()),
            }],
        }
    }

    #[test]
    fn should_accept_status_only_update() {
        let request = UpdateProductRequest {
            status: Some(ProductStatusDto::SoldOut),
            details: None,
        };

        assert!(matches!(
            request.into_change(),
            Some(ProductChange::Status(ProductStatus::SoldOut))
        ));
    }

    #[test]
    fn should_reject_ambiguous_or_empty_update() {
        let both = UpdateProductRequest {
            status: Some(ProductStatusDto::Sell),
            details: Some(details()),
        };
        let neither = UpdateProductRequest {
            status: None,
            details: None,
        };

        assert!(both.into_change().is_none());
        assert!(neither.into_change().is_none());
    }

    #[test]
    fn should_assign_stored_names_to_uploaded_images() {
        let details: ProductDetails = details().into();

        let image = &details.images[0];
        assert!(image.file_name.ends_with(".png"));
        assert_eq!(image.original_file_name, "front.PNG");
    }
}
