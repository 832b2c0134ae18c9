//! SeaORM implementation of RepositoryProvider and UnitOfWork

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, Statement, TransactionTrait,
};

use crate::domain::{
    AccountRepository, CartRepository, DomainResult, ProductRepository, Repositories,
    RepositoryProvider, UnitOfWork,
};

/// Repositories backed by any SeaORM connection.
///
/// Over a [`DatabaseConnection`] every call runs in its own implicit
/// transaction; over a [`DatabaseTransaction`] all calls share one.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let products = repos.products().find_all().await?;
///
/// let uow = repos.begin().await?;
/// let cart = uow.carts().find_by_account_id(1).await?;
/// uow.commit().await?;
/// ```
pub struct SeaOrmRepositories<C> {
    pub(super) conn: C,
}

/// The shared store: a pooled connection.
pub type SeaOrmRepositoryProvider = SeaOrmRepositories<DatabaseConnection>;

/// Repositories bound to one open database transaction.
pub type SeaOrmUnitOfWork = SeaOrmRepositories<DatabaseTransaction>;

impl<C> SeaOrmRepositories<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

impl<C> Repositories for SeaOrmRepositories<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    fn accounts(&self) -> &dyn AccountRepository {
        self
    }

    fn products(&self) -> &dyn ProductRepository {
        self
    }

    fn carts(&self) -> &dyn CartRepository {
        self
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let txn = self.conn.begin().await?;
        Ok(Box::new(SeaOrmRepositories::new(txn)))
    }

    async fn ping(&self) -> DomainResult<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let this = *self;
        this.conn.commit().await?;
        Ok(())
    }
}
