//! Cart REST API handlers
//!
//! Every route acts on the cart of the resolved principal.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::{AddItemRequest, AddItemsRequest, CartResponse, DeliveryRequest};
use crate::application::services::CartLine;
use crate::application::CartService;
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct CartState {
    pub service: Arc<CartService>,
}

fn record(operation: &'static str) {
    metrics::counter!("market_cart_operations_total", "operation" => operation).increment(1);
}

#[utoipa::path(
    get,
    path = "/rest/customer/cart",
    tag = "Cart",
    security(("principal" = [])),
    responses(
        (status = 200, description = "Cart of the caller, created if missing", body = ApiResponse<CartResponse>),
        (status = 404, description = "No account for the principal")
    )
)]
pub async fn get_cart(
    State(state): State<CartState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<CartResponse> {
    let cart = state.service.get_or_create(&user.email).await?;
    Ok(Json(ApiResponse::success(cart.into())))
}

#[utoipa::path(
    put,
    path = "/rest/customer/cart",
    tag = "Cart",
    security(("principal" = [])),
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Updated cart; unchanged if the product is unavailable", body = ApiResponse<CartResponse>),
        (status = 404, description = "Unknown product or account"),
        (status = 422, description = "Quantity below 1")
    )
)]
pub async fn add_item(
    State(state): State<CartState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<AddItemRequest>,
) -> ApiResult<CartResponse> {
    let cart = state
        .service
        .add_item(&user.email, req.product_id, req.quantity)
        .await?;
    record("add_item");
    Ok(Json(ApiResponse::success(cart.into())))
}

#[utoipa::path(
    post,
    path = "/rest/customer/cart/items",
    tag = "Cart",
    security(("principal" = [])),
    request_body = AddItemsRequest,
    responses(
        (status = 200, description = "Updated cart; unknown and unavailable products are skipped", body = ApiResponse<CartResponse>),
        (status = 422, description = "A quantity below 1")
    )
)]
pub async fn add_items(
    State(state): State<CartState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<AddItemsRequest>,
) -> ApiResult<CartResponse> {
    let lines: Vec<CartLine> = req.items.iter().map(Into::into).collect();
    let cart = state.service.add_all_items(&user.email, &lines).await?;
    record("add_items");
    Ok(Json(ApiResponse::success(cart.into())))
}

#[utoipa::path(
    put,
    path = "/rest/customer/cart/delivery",
    tag = "Cart",
    security(("principal" = [])),
    request_body = DeliveryRequest,
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<CartResponse>)
    )
)]
pub async fn set_delivery(
    State(state): State<CartState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<DeliveryRequest>,
) -> ApiResult<CartResponse> {
    let cart = state.service.set_delivery(&user.email, req.included).await?;
    record("set_delivery");
    Ok(Json(ApiResponse::success(cart.into())))
}

#[utoipa::path(
    delete,
    path = "/rest/customer/cart",
    tag = "Cart",
    security(("principal" = [])),
    responses(
        (status = 200, description = "Emptied cart; delivery flag kept", body = ApiResponse<CartResponse>)
    )
)]
pub async fn clear_cart(
    State(state): State<CartState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<CartResponse> {
    let cart = state.service.clear(&user.email).await?;
    record("clear");
    Ok(Json(ApiResponse::success(cart.into())))
}
