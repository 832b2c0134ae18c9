//! Insert the default accounts and the product catalog

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_accounts::Accounts;
use super::m20240101_000002_create_products::Products;
use crate::infrastructure::seed::{seed_products, SEED_ACCOUNTS};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();

        let mut accounts = Query::insert();
        accounts.into_table(Accounts::Table).columns([
            Accounts::Id,
            Accounts::Email,
            Accounts::Name,
            Accounts::Active,
            Accounts::CreatedAt,
        ]);
        for (id, email, name) in SEED_ACCOUNTS {
            accounts.values_panic([
                id.into(),
                email.into(),
                name.into(),
                true.into(),
                now.clone().into(),
            ]);
        }
        manager.exec_stmt(accounts).await?;

        let mut products = Query::insert();
        products.into_table(Products::Table).columns([
            Products::Id,
            Products::Name,
            Products::Distillery,
            Products::Description,
            Products::Price,
            Products::VolumeMl,
            Products::Alcohol,
            Products::Available,
        ]);
        for p in seed_products() {
            products.values_panic([
                p.id.into(),
                p.name.into(),
                p.distillery.into(),
                p.description.into(),
                p.price.into(),
                p.volume_ml.into(),
                p.alcohol.into(),
                p.available.into(),
            ]);
        }
        manager.exec_stmt(products).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Products::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Accounts::Table).to_owned())
            .await
    }
}
