//! Product entity for the catalog

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog product
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    pub distillery: String,

    pub description: Option<String>,

    /// Price in cents
    pub price: i32,

    /// Bottle volume in millilitres
    pub volume_ml: i32,

    /// Alcohol by volume, percent
    pub alcohol: f32,

    /// Whether the product can currently be ordered
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItems,
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
