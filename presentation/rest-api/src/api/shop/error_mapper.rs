use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shop::errors::ShopError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ShopError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShopError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "shop.name_empty"),
            ShopError::PhoneEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shop.phone_empty",
            ),
            ShopError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "shop.not_found"),
            ShopError::AlreadyExists => (StatusCode::CONFLICT, "Conflict", "shop.already_exists"),
            ShopError::UserMismatch => (StatusCode::FORBIDDEN, "Forbidden", "shop.user_mismatch"),
            ShopError::Repository(e) => {
                tracing::error!("Shop persistence failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        error_response(status, name, message)
    }
}
