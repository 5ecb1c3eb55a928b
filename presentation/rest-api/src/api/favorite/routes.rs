use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::get_all::{
    GetFavoriteProductsParams, GetFavoriteProductsUseCase,
};
use business::domain::favorite::use_cases::remove::{
    RemoveFavoriteParams, RemoveFavoriteUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::FavoriteProductPageResponse;
use crate::api::pagination::page_request;
use crate::api::security::CallerBearer;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    add_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
    get_all_use_case: Arc<dyn GetFavoriteProductsUseCase>,
}

impl FavoriteApi {
    pub fn new(
        add_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
        get_all_use_case: Arc<dyn GetFavoriteProductsUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_all_use_case,
        }
    }
}

/// Favorites API
///
/// The caller's favorited products. Adding twice is harmless; removing keeps
/// the history so a later add restores the same marker.
#[OpenApi]
impl FavoriteApi {
    /// List favorite products
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_favorites(
        &self,
        auth: CallerBearer,
        /// Zero-based page index (default: 0)
        page: Query<Option<u32>>,
        /// Page size (default: 20, max: 100)
        size: Query<Option<u32>>,
    ) -> GetFavoritesResponse {
        let params = GetFavoriteProductsParams {
            user_id: auth.0,
            page: page_request(page.0, size.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => GetFavoritesResponse::Ok(Json(products.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetFavoritesResponse::InternalError(json)
            }
        }
    }

    /// Favorite a product
    #[oai(
        path = "/favorites/:product_id",
        method = "post",
        tag = "ApiTags::Favorites"
    )]
    async fn add_favorite(&self, auth: CallerBearer, product_id: Path<i64>) -> AddFavoriteResponse {
        let params = AddFavoriteParams {
            user_id: auth.0,
            product_id: ProductId::new(product_id.0),
        };

        match self.add_use_case.execute(params).await {
            Ok(()) => AddFavoriteResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddFavoriteResponse::NotFound(json),
                    _ => AddFavoriteResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a favorite
    ///
    /// 404 when the product was never favorited by the caller.
    #[oai(
        path = "/favorites/:product_id",
        method = "delete",
        tag = "ApiTags::Favorites"
    )]
    async fn remove_favorite(
        &self,
        auth: CallerBearer,
        product_id: Path<i64>,
    ) -> RemoveFavoriteResponse {
        let params = RemoveFavoriteParams {
            user_id: auth.0,
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveFavoriteResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFavoriteResponse::NotFound(json),
                    _ => RemoveFavoriteResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFavoriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFavoriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
