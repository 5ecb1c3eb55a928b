#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("shop.name_empty")]
    NameEmpty,
    #[error("shop.phone_empty")]
    PhoneEmpty,
    #[error("shop.not_found")]
    NotFound,
    #[error("shop.already_exists")]
    AlreadyExists,
    #[error("shop.user_mismatch")]
    UserMismatch,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
