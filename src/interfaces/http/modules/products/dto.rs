//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Product;

/// Catalog entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i64,
    pub name: String,
    pub distillery: String,
    pub description: Option<String>,
    /// Price in cents
    pub price: i32,
    pub volume_ml: i32,
    /// Alcohol by volume, percent
    pub alcohol: f32,
    pub available: bool,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.id,
            name: p.name,
            distillery: p.distillery,
            description: p.description,
            price: p.price,
            volume_ml: p.volume_ml,
            alcohol: p.alcohol,
            available: p.available,
        }
    }
}
