use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductStatus;
use crate::domain::shared::value_objects::{ProductId, ShopId, is_blank};

/// Reference to an already uploaded image file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    /// Unique name the file is stored under.
    pub file_name: String,
    pub original_file_name: String,
    pub size: i64,
    pub temp_image_url: Option<String>,
}

impl ProductImage {
    /// Attaches an uploaded file, deriving a unique stored name from its extension.
    pub fn new(original_file_name: String, size: i64, temp_image_url: Option<String>) -> Self {
        let extension = std::path::Path::new(&original_file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let file_name = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        Self {
            file_name,
            original_file_name,
            size,
            temp_image_url,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        file_name: String,
        original_file_name: String,
        size: i64,
        temp_image_url: Option<String>,
    ) -> Self {
        Self {
            file_name,
            original_file_name,
            size,
            temp_image_url,
        }
    }
}

/// Seller-supplied description of an item for sale.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub name: String,
    pub brand_name: String,
    pub size: String,
    pub price: i64,
    pub description: String,
    pub main_category: String,
    pub sub_category: Option<String>,
    pub images: Vec<ProductImage>,
}

impl ProductDetails {
    pub fn validate(&self) -> Result<(), ProductError> {
        let required = [
            ("name", &self.name),
            ("brand_name", &self.brand_name),
            ("size", &self.size),
            ("description", &self.description),
            ("main_category", &self.main_category),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| is_blank(value)) {
            return Err(ProductError::RequiredFieldEmpty(*field));
        }

        if self.price < 0 {
            return Err(ProductError::InvalidPrice);
        }

        if self.images.is_empty()
            || self
                .images
                .iter()
                .any(|image| is_blank(&image.original_file_name))
        {
            return Err(ProductError::RequiredFieldEmpty("images"));
        }

        Ok(())
    }
}

/// A validated product that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub shop_id: ShopId,
    pub details: ProductDetails,
    pub status: ProductStatus,
}

impl NewProduct {
    /// New listings always start on sale.
    pub fn new(shop_id: ShopId, details: ProductDetails) -> Result<Self, ProductError> {
        details.validate()?;
        Ok(Self {
            shop_id,
            details,
            status: ProductStatus::Sell,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub shop_id: ShopId,
    pub name: String,
    pub brand_name: String,
    pub size: String,
    pub price: i64,
    pub description: String,
    pub main_category: String,
    pub sub_category: Option<String>,
    pub status: ProductStatus,
    pub images: Vec<ProductImage>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        shop_id: ShopId,
        details: ProductDetails,
        status: ProductStatus,
        enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shop_id,
            name: details.name,
            brand_name: details.brand_name,
            size: details.size,
            price: details.price,
            description: details.description,
            main_category: details.main_category,
            sub_category: details.sub_category,
            status,
            images: details.images,
            enabled,
            created_at,
            updated_at,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn belongs_to(&self, shop_id: ShopId) -> bool {
        self.shop_id == shop_id
    }

    /// Replaces every descriptive field, images included. Expects validated details.
    pub fn apply_details(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.brand_name = details.brand_name;
        self.size = details.size;
        self.price = details.price;
        self.description = details.description;
        self.main_category = details.main_category;
        self.sub_category = details.sub_category;
        self.images = details.images;
        self.updated_at = Utc::now();
    }

    pub fn change_status(&mut self, status: ProductStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }
}

/// A product as seen by one caller.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    pub favorited: bool,
}
