//! Cart DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::CartLine;
use crate::domain::{Cart, CartItem};

/// One cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id(),
            product_name: item.product.name.clone(),
            quantity: item.quantity,
        }
    }
}

/// Shopping cart of the caller; items ordered by product id
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub account_id: i64,
    pub delivery_included: bool,
    /// Sum of quantities over all lines
    pub items_count: i64,
    pub items: Vec<CartItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            account_id: cart.account_id,
            delivery_included: cart.delivery_included,
            items_count: cart.items_count(),
            items: cart.items().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

impl From<&AddItemRequest> for CartLine {
    fn from(req: &AddItemRequest) -> Self {
        CartLine::new(req.product_id, req.quantity)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddItemsRequest {
    #[validate(nested)]
    pub items: Vec<AddItemRequest>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeliveryRequest {
    pub included: bool,
}
