pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::{SeaOrmRepositoryProvider, SeaOrmUnitOfWork};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use migrator::Migrator;

const DEFAULT_URL: &str = "sqlite://./market.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./market.db?mode=rwc")
    pub url: String,
    /// Apply pending migrations right after connecting
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database, gone when the process exits
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            ..Self::default()
        }
    }

    fn is_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection and, if configured, migrate it.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if config.is_memory() {
        // Every pooled connection would otherwise open its own empty database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    Ok(db)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cart, Repositories, RepositoryProvider};

    async fn provider() -> SeaOrmRepositoryProvider {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        SeaOrmRepositoryProvider::new(db)
    }

    #[tokio::test]
    async fn migrations_seed_accounts_and_catalog() {
        let repos = provider().await;

        let admin = repos
            .accounts()
            .find_by_email("admin@market.local")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.id, 1);
        assert!(admin.active);

        let products = repos.products().find_all().await.unwrap();
        assert_eq!(products.len(), 11);
        assert_eq!(products[0].name, "Ardbeg Ten");
        assert!(!products.iter().find(|p| p.id == 8).unwrap().available);
    }

    #[tokio::test]
    async fn unknown_keys_return_none() {
        let repos = provider().await;
        assert!(repos.accounts().find_by_email("x@y.z").await.unwrap().is_none());
        assert!(repos.products().find_by_id(404).await.unwrap().is_none());
        assert!(repos.carts().find_by_account_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cart_save_round_trips_items_and_delivery() {
        let repos = provider().await;
        let ardbeg = repos.products().find_by_id(1).await.unwrap().unwrap();
        let oban = repos.products().find_by_id(10).await.unwrap().unwrap();

        let mut cart = Cart::new(2);
        cart.update(&oban, 1);
        cart.update(&ardbeg, 3);
        cart.set_delivery_included(true);
        repos.carts().save(cart.clone()).await.unwrap();

        let loaded = repos.carts().find_by_account_id(2).await.unwrap().unwrap();
        assert_eq!(loaded, cart);

        // Second save replaces the lines instead of appending
        let mut cart = loaded;
        cart.update(&ardbeg, -3);
        cart.set_delivery_included(false);
        repos.carts().save(cart.clone()).await.unwrap();

        let loaded = repos.carts().find_by_account_id(2).await.unwrap().unwrap();
        assert_eq!(loaded.line_count(), 1);
        assert_eq!(loaded.item(10).map(|i| i.quantity), Some(1));
        assert!(!loaded.delivery_included);
    }

    #[tokio::test]
    async fn uncommitted_unit_of_work_rolls_back() {
        let repos = provider().await;
        {
            let uow = repos.begin().await.unwrap();
            uow.carts().save(Cart::new(1)).await.unwrap();
            assert!(uow.carts().find_by_account_id(1).await.unwrap().is_some());
        }
        assert!(repos.carts().find_by_account_id(1).await.unwrap().is_none());

        let uow = repos.begin().await.unwrap();
        uow.carts().save(Cart::new(1)).await.unwrap();
        uow.commit().await.unwrap();
        assert!(repos.carts().find_by_account_id(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_connection() {
        let repos = provider().await;
        repos.ping().await.unwrap();
    }
}
