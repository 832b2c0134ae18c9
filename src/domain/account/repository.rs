use async_trait::async_trait;

use super::Account;
use crate::domain::DomainResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;
}
