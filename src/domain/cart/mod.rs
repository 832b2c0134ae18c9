//! Cart aggregate
//!
//! One cart per account, keyed by the account id. Persisted and loaded
//! together with its items.

pub mod model;
pub mod repository;

pub use model::{Cart, CartItem};
pub use repository::CartRepository;
