use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shared::value_objects::ShopId;
use business::domain::shop::use_cases::create::{CreateShopParams, CreateShopUseCase};
use business::domain::shop::use_cases::delete::{DeleteShopParams, DeleteShopUseCase};
use business::domain::shop::use_cases::get_all::{GetAllShopsParams, GetAllShopsUseCase};
use business::domain::shop::use_cases::get_by_id::{GetShopByIdParams, GetShopByIdUseCase};
use business::domain::shop::use_cases::update::{UpdateShopParams, UpdateShopUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pagination::page_request;
use crate::api::security::CallerBearer;
use crate::api::shop::dto::{
    CreateShopRequest, RegisteredShopResponse, ShopPageResponse, ShopResponse, UpdateShopRequest,
};
use crate::api::tags::ApiTags;

pub struct ShopApi {
    create_use_case: Arc<dyn CreateShopUseCase>,
    get_all_use_case: Arc<dyn GetAllShopsUseCase>,
    get_by_id_use_case: Arc<dyn GetShopByIdUseCase>,
    update_use_case: Arc<dyn UpdateShopUseCase>,
    delete_use_case: Arc<dyn DeleteShopUseCase>,
}

impl ShopApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShopUseCase>,
        get_all_use_case: Arc<dyn GetAllShopsUseCase>,
        get_by_id_use_case: Arc<dyn GetShopByIdUseCase>,
        update_use_case: Arc<dyn UpdateShopUseCase>,
        delete_use_case: Arc<dyn DeleteShopUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Shop management API
///
/// Registering, browsing and maintaining shops. A deleted shop is only hidden;
/// registering the same name and phone again brings it back.
#[OpenApi]
impl ShopApi {
    /// Register a shop
    ///
    /// Creates the shop, or reactivates a previously deleted one with the same
    /// name and phone. Fails with 409 while an active shop holds that pair.
    #[oai(path = "/shops", method = "post", tag = "ApiTags::Shops")]
    async fn create_shop(
        &self,
        _auth: CallerBearer,
        body: Json<CreateShopRequest>,
    ) -> CreateShopResponse {
        let params = CreateShopParams {
            name: body.0.name,
            info: body.0.info,
            phone: body.0.phone,
        };

        match self.create_use_case.execute(params).await {
            Ok(shop) => CreateShopResponse::Created(Json(shop.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShopResponse::BadRequest(json),
                    409 => CreateShopResponse::Conflict(json),
                    _ => CreateShopResponse::InternalError(json),
                }
            }
        }
    }

    /// List shops
    ///
    /// Active shops, newest first.
    #[oai(path = "/shops", method = "get", tag = "ApiTags::Shops")]
    async fn get_all_shops(
        &self,
        _auth: CallerBearer,
        /// Zero-based page index (default: 0)
        page: Query<Option<u32>>,
        /// Page size (default: 20, max: 100)
        size: Query<Option<u32>>,
    ) -> GetAllShopsResponse {
        let params = GetAllShopsParams {
            page: page_request(page.0, size.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(shops) => GetAllShopsResponse::Ok(Json(shops.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllShopsResponse::InternalError(json)
            }
        }
    }

    /// Get a shop by ID
    #[oai(path = "/shops/:id", method = "get", tag = "ApiTags::Shops")]
    async fn get_shop_by_id(&self, _auth: CallerBearer, id: Path<i64>) -> GetShopByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetShopByIdParams {
                id: ShopId::new(id.0),
            })
            .await
        {
            Ok(shop) => GetShopByIdResponse::Ok(Json(shop.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShopByIdResponse::NotFound(json),
                    _ => GetShopByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a shop
    ///
    /// Only a seller of this shop may update it.
    #[oai(path = "/shops/:id", method = "put", tag = "ApiTags::Shops")]
    async fn update_shop(
        &self,
        auth: CallerBearer,
        id: Path<i64>,
        body: Json<UpdateShopRequest>,
    ) -> UpdateShopResponse {
        let params = UpdateShopParams {
            id: ShopId::new(id.0),
            user_id: auth.0,
            name: body.0.name,
            info: body.0.info,
            phone: body.0.phone,
        };

        match self.update_use_case.execute(params).await {
            Ok(shop) => UpdateShopResponse::Ok(Json(shop.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShopResponse::BadRequest(json),
                    403 => UpdateShopResponse::Forbidden(json),
                    404 => UpdateShopResponse::NotFound(json),
                    409 => UpdateShopResponse::Conflict(json),
                    _ => UpdateShopResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a shop
    ///
    /// Soft delete: the shop disappears from lookups and listings.
    #[oai(path = "/shops/:id", method = "delete", tag = "ApiTags::Shops")]
    async fn delete_shop(&self, _auth: CallerBearer, id: Path<i64>) -> DeleteShopResponse {
        match self
            .delete_use_case
            .execute(DeleteShopParams {
                id: ShopId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteShopResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShopResponse::NotFound(json),
                    _ => DeleteShopResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShopResponse {
    #[oai(status = 201)]
    Created(Json<RegisteredShopResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllShopsResponse {
    #[oai(status = 200)]
    Ok(Json<ShopPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShopByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ShopResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShopResponse {
    #[oai(status = 200)]
    Ok(Json<ShopResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShopResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
