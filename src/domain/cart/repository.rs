use async_trait::async_trait;

use super::Cart;
use crate::domain::DomainResult;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_account_id(&self, account_id: i64) -> DomainResult<Option<Cart>>;

    /// Insert or replace the cart row and all of its items.
    async fn save(&self, cart: Cart) -> DomainResult<Cart>;
}
