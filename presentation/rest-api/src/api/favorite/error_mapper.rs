use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FavoriteError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "favorite.not_found"),
            FavoriteError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "favorite.product_not_found",
            ),
            FavoriteError::Repository(e) => {
                tracing::error!("Favorite persistence failure: {e}");
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
