//! Product catalog service

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Product, Repositories, RepositoryProvider};

/// Resolve a product by id, failing with `NotFound` when unknown.
pub(crate) async fn require_product<R>(repos: &R, product_id: i64) -> DomainResult<Product>
where
    R: Repositories + ?Sized,
{
    repos
        .products()
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| DomainError::product_not_found(product_id))
}

pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All products ordered by id.
    pub async fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.repos.products().find_all().await
    }

    pub async fn get_product(&self, product_id: i64) -> DomainResult<Product> {
        require_product(self.repos.as_ref(), product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStorage;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryStorage::seeded()))
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let products = service().list_products().await.unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn get_unknown_product_is_not_found() {
        let err = service().get_product(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product", .. }));
    }
}
