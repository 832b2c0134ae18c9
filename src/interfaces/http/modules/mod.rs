pub mod cart;
pub mod customer;
pub mod health;
pub mod metrics;
pub mod products;
pub mod request_id;
