use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Sell,
    SoldOut,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Sell => write!(f, "sell"),
            ProductStatus::SoldOut => write!(f, "sold_out"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sell" => Ok(ProductStatus::Sell),
            "sold_out" => Ok(ProductStatus::SoldOut),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

/// Listing filter: products under a main category, optionally narrowed by sub category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub main_category: String,
    pub sub_category: Option<String>,
}
