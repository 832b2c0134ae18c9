//! Application services

pub mod account;
pub mod cart;
pub mod catalog;

pub use account::AccountService;
pub use cart::{CartLine, CartService};
pub use catalog::ProductService;
