//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_accounts;
mod m20240101_000002_create_products;
mod m20240101_000003_create_carts;
mod m20240101_000004_create_cart_items;
mod m20240101_000005_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_accounts::Migration),
            Box::new(m20240101_000002_create_products::Migration),
            Box::new(m20240101_000003_create_carts::Migration),
            Box::new(m20240101_000004_create_cart_items::Migration),
            Box::new(m20240101_000005_seed_catalog::Migration),
        ]
    }
}
