//! Repository traits for the domain layer
//!
//! Contains:
//! - `Repositories` — access to the per-aggregate repositories
//! - `UnitOfWork` — repositories bound to one open transaction
//! - `RepositoryProvider` — the shared store; hands out units of work

use async_trait::async_trait;

use super::account::AccountRepository;
use super::cart::CartRepository;
use super::product::ProductRepository;
use super::DomainResult;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn Repositories) {
///     let account = repos.accounts().find_by_email("a@b.c").await?;
///     let cart = repos.carts().find_by_account_id(account.id).await?;
/// }
/// ```
pub trait Repositories: Send + Sync {
    fn accounts(&self) -> &dyn AccountRepository;
    fn products(&self) -> &dyn ProductRepository;
    fn carts(&self) -> &dyn CartRepository;
}

/// Repositories whose reads and writes belong to one transaction.
///
/// Dropping a unit of work without calling [`commit`](UnitOfWork::commit)
/// discards its writes.
#[async_trait]
pub trait UnitOfWork: Repositories {
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

/// The shared store.
///
/// Used directly, each call runs in its own implicit transaction (reads that
/// need no transaction of their own). [`begin`](RepositoryProvider::begin)
/// opens an explicit one for load → mutate → save sequences.
#[async_trait]
pub trait RepositoryProvider: Repositories {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;

    /// Cheap liveness check of the backing store.
    async fn ping(&self) -> DomainResult<()>;
}
