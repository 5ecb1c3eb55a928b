use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::seller::use_cases::register::{RegisterSellerParams, RegisterSellerUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::CallerBearer;
use crate::api::seller::dto::RegisterSellerRequest;
use crate::api::shop::dto::RegisteredShopResponse;
use crate::api::tags::ApiTags;

pub struct SellerApi {
    register_use_case: Arc<dyn RegisterSellerUseCase>,
}

impl SellerApi {
    pub fn new(register_use_case: Arc<dyn RegisterSellerUseCase>) -> Self {
        Self { register_use_case }
    }
}

#[OpenApi]
impl SellerApi {
    /// Become a seller
    ///
    /// Registers a shop for the caller and links the caller to it. A user can
    /// sell for one shop only.
    #[oai(path = "/sellers", method = "post", tag = "ApiTags::Sellers")]
    async fn register_seller(
        &self,
        auth: CallerBearer,
        body: Json<RegisterSellerRequest>,
    ) -> RegisterSellerResponse {
        let params = RegisterSellerParams {
            user_id: auth.0,
            shop_name: body.0.shop_name,
            shop_info: body.0.shop_info,
            shop_phone: body.0.shop_phone,
        };

        match self.register_use_case.execute(params).await {
            Ok(shop) => RegisterSellerResponse::Created(Json(shop.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterSellerResponse::BadRequest(json),
                    409 => RegisterSellerResponse::Conflict(json),
                    _ => RegisterSellerResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterSellerResponse {
    #[oai(status = 201)]
    Created(Json<RegisteredShopResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
