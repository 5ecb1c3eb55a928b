use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::seller::errors::SellerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SellerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SellerError::AlreadyRegistered => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "seller.already_registered",
            ),
            SellerError::Shop(shop_error) => shop_error.into_error_response(),
            SellerError::Repository(e) => {
                tracing::error!("Seller persistence failure: {e}");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        }
    }
}
