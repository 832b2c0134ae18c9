//! Product domain entity

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub distillery: String,
    pub description: Option<String>,
    /// Price in smallest currency unit (e.g. cents)
    pub price: i32,
    pub volume_ml: i32,
    /// Alcohol by volume, percent
    pub alcohol: f32,
    /// Only available products may be added to a cart
    pub available: bool,
}
