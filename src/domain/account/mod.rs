//! Account aggregate
//!
//! Accounts are owned by the account store; the cart only reads them.

pub mod model;
pub mod repository;

pub use model::Account;
pub use repository::AccountRepository;
