use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::RequiredFieldEmpty(field) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        name: "ValidationError".to_string(),
                        message: format!("product.required_field_empty.{field}"),
                    }),
                );
            }
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::CategoryRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_required",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::NotSeller => (StatusCode::FORBIDDEN, "Forbidden", "product.not_seller"),
            ProductError::UserMismatch => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "product.user_mismatch",
            ),
            ProductError::Repository(e) => {
                tracing::error!("Product persistence failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
