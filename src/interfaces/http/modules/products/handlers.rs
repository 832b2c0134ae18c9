//! Product catalog REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::ProductResponse;
use crate::application::ProductService;
use crate::interfaces::http::common::{ApiResponse, ApiResult};

#[derive(Clone)]
pub struct ProductState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    get,
    path = "/rest/products",
    tag = "Products",
    responses(
        (status = 200, description = "Whole catalog ordered by id", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn list_products(State(state): State<ProductState>) -> ApiResult<Vec<ProductResponse>> {
    let products = state.service.list_products().await?;
    Ok(Json(ApiResponse::success(
        products.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/rest/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Unknown product")
    )
)]
pub async fn get_product(
    State(state): State<ProductState>,
    Path(id): Path<i64>,
) -> ApiResult<ProductResponse> {
    let product = state.service.get_product(id).await?;
    Ok(Json(ApiResponse::success(product.into())))
}
