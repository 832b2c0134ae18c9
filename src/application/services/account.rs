//! Account lookups

use std::sync::Arc;

use crate::domain::{Account, DomainError, DomainResult, Repositories, RepositoryProvider};

/// Resolve an account by email, failing with `NotFound` when absent.
pub(crate) async fn require_account<R>(repos: &R, email: &str) -> DomainResult<Account>
where
    R: Repositories + ?Sized,
{
    repos
        .accounts()
        .find_by_email(email)
        .await?
        .ok_or_else(|| DomainError::account_not_found(email))
}

pub struct AccountService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AccountService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn get_by_email(&self, email: &str) -> DomainResult<Account> {
        require_account(self.repos.as_ref(), email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStorage;

    #[tokio::test]
    async fn known_email_resolves() {
        let service = AccountService::new(Arc::new(InMemoryStorage::seeded()));
        let account = service.get_by_email("customer@market.local").await.unwrap();
        assert_eq!(account.id, 2);
        assert_eq!(account.name, "Test Customer");
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let service = AccountService::new(Arc::new(InMemoryStorage::seeded()));
        let err = service.get_by_email("ghost@market.local").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Account", .. }));
    }
}
