use async_trait::async_trait;

use super::Product;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>>;
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
}
