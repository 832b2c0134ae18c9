//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories over one generic connection holder.

pub mod account_repository;
pub mod cart_repository;
pub mod product_repository;
pub mod repository_provider;

pub use repository_provider::{SeaOrmRepositories, SeaOrmRepositoryProvider, SeaOrmUnitOfWork};
