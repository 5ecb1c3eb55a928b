#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Carries the name of the missing field.
    #[error("product.required_field_empty")]
    RequiredFieldEmpty(&'static str),
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.category_required")]
    CategoryRequired,
    #[error("product.not_found")]
    NotFound,
    #[error("product.not_seller")]
    NotSeller,
    #[error("product.user_mismatch")]
    UserMismatch,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
