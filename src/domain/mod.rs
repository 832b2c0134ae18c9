//! Domain layer: aggregates, repository interfaces and errors.

pub mod account;
pub mod cart;
pub mod product;
pub mod repositories;

// Re-export commonly used types
pub use account::{Account, AccountRepository};
pub use cart::{Cart, CartItem, CartRepository};
pub use product::{Product, ProductRepository};
pub use repositories::{RepositoryProvider, Repositories, UnitOfWork};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
