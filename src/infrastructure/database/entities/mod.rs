//! Database entities module

pub mod account;
pub mod cart;
pub mod cart_item;
pub mod product;

pub use account::Entity as Account;
pub use cart::Entity as Cart;
pub use cart_item::Entity as CartItem;
pub use product::Entity as Product;
