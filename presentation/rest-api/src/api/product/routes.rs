use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pagination::page_request;
use crate::api::product::dto::{
    ProductDetailsRequest, ProductPageResponse, ProductResponse, ProductViewResponse,
    UpdateProductRequest,
};
use crate::api::security::CallerBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_category_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product listing API
///
/// Sellers manage the products of their own shop; every caller can browse.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// Lists a new product in the caller's shop. New products start on sale.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: CallerBearer,
        body: Json<ProductDetailsRequest>,
    ) -> CreateProductResponse {
        let params = CreateProductParams {
            user_id: auth.0,
            details: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    403 => CreateProductResponse::Forbidden(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products by category
    ///
    /// Active products under `main_category`, optionally narrowed to
    /// `sub_category`, newest first.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products_by_category(
        &self,
        auth: CallerBearer,
        /// Main category (required)
        main_category: Query<Option<String>>,
        sub_category: Query<Option<String>>,
        /// Zero-based page index (default: 0)
        page: Query<Option<u32>>,
        /// Page size (default: 20, max: 100)
        size: Query<Option<u32>>,
    ) -> GetProductsByCategoryResponse {
        let params = GetProductsByCategoryParams {
            user_id: auth.0,
            main_category: main_category.0.unwrap_or_default(),
            sub_category: sub_category.0,
            page: page_request(page.0, size.0),
        };

        match self.get_by_category_use_case.execute(params).await {
            Ok(products) => GetProductsByCategoryResponse::Ok(Json(products.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductsByCategoryResponse::BadRequest(json),
                    _ => GetProductsByCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        auth: CallerBearer,
        id: Path<i64>,
    ) -> GetProductByIdResponse {
        let params = GetProductByIdParams {
            id: ProductId::new(id.0),
            user_id: auth.0,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(view) => GetProductByIdResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Send `status` to flip the sale status, or `details` to rewrite the
    /// listing (images included). Exactly one of the two is accepted.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: CallerBearer,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Some(change) = body.0.into_change() else {
            return UpdateProductResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_update",
            ));
        };

        let params = UpdateProductParams {
            id: ProductId::new(id.0),
            user_id: auth.0,
            change,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Soft delete; only a seller of the owning shop may delete.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: CallerBearer, id: Path<i64>) -> DeleteProductResponse {
        let params = DeleteProductParams {
            id: ProductId::new(id.0),
            user_id: auth.0,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductViewResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
