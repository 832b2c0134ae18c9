//! # Market Service
//!
//! Product catalog and per-account shopping cart behind a REST API.
//!
//! ## Architecture
//!
//! - **domain**: aggregates (account, product, cart), repository traits, errors
//! - **application**: catalog, account and cart services
//! - **infrastructure**: SeaORM/SQLite persistence, in-memory store, seed data
//! - **interfaces**: axum REST API with Swagger documentation
//! - **support**: error types and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryStorage, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
