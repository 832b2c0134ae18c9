//! In-memory store implementation

mod memory;

pub use memory::{InMemoryStorage, InMemoryUnitOfWork};
