use crate::domain::shop::errors::ShopError;

#[derive(Debug, thiserror::Error)]
pub enum SellerError {
    #[error("seller.already_registered")]
    AlreadyRegistered,
    #[error("{0}")]
    Shop(#[from] ShopError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
