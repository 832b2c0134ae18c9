//! Cart service — lazy cart creation and the cart update rules
//!
//! Every operation is keyed by the account email. Mutations run as one
//! load → mutate → save sequence inside a unit of work; `get_or_create`
//! on its own runs directly against the store.

use std::sync::Arc;

use tracing::{debug, info};

use super::account::require_account;
use super::catalog::require_product;
use crate::domain::{Cart, DomainResult, Repositories, RepositoryProvider};

/// One requested line of a batch add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: i64,
    pub quantity: i32,
}

impl CartLine {
    pub fn new(product_id: i64, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Load the account's cart, creating and persisting an empty one if none exists.
async fn get_or_create_in<R>(repos: &R, email: &str) -> DomainResult<Cart>
where
    R: Repositories + ?Sized,
{
    let account = require_account(repos, email).await?;
    if let Some(cart) = repos.carts().find_by_account_id(account.id).await? {
        return Ok(cart);
    }
    debug!(account_id = account.id, "Creating new cart");
    repos.carts().save(Cart::new(account.id)).await
}

pub struct CartService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CartService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn get_or_create(&self, email: &str) -> DomainResult<Cart> {
        get_or_create_in(self.repos.as_ref(), email).await
    }

    /// Add `quantity` units of a product.
    ///
    /// Unknown products fail with `NotFound`. Unavailable products leave the
    /// cart untouched and nothing is saved.
    pub async fn add_item(&self, email: &str, product_id: i64, quantity: i32) -> DomainResult<Cart> {
        let uow = self.repos.begin().await?;
        let mut cart = get_or_create_in(uow.as_ref(), email).await?;
        let product = require_product(uow.as_ref(), product_id).await?;

        if !product.available {
            debug!(
                account_id = cart.account_id,
                product_id, "Product unavailable, cart left unchanged"
            );
            uow.commit().await?;
            return Ok(cart);
        }

        cart.update(&product, quantity);
        let saved = uow.carts().save(cart).await?;
        uow.commit().await?;

        info!(
            account_id = saved.account_id,
            product_id, quantity, "Product added to cart"
        );
        Ok(saved)
    }

    /// Add several lines at once.
    ///
    /// Unknown and unavailable products are skipped without error. The cart
    /// is saved only if at least one line was merged.
    pub async fn add_all_items(&self, email: &str, lines: &[CartLine]) -> DomainResult<Cart> {
        let uow = self.repos.begin().await?;
        let mut cart = get_or_create_in(uow.as_ref(), email).await?;

        let mut updated = false;
        for line in lines {
            match uow.products().find_by_id(line.product_id).await? {
                Some(product) if product.available => {
                    cart.update(&product, line.quantity);
                    updated = true;
                }
                _ => debug!(
                    account_id = cart.account_id,
                    product_id = line.product_id,
                    "Skipping unknown or unavailable product"
                ),
            }
        }

        let result = if updated {
            uow.carts().save(cart).await?
        } else {
            cart
        };
        uow.commit().await?;
        Ok(result)
    }

    /// Set the delivery flag. Always saved, even when unchanged.
    pub async fn set_delivery(&self, email: &str, included: bool) -> DomainResult<Cart> {
        let uow = self.repos.begin().await?;
        let mut cart = get_or_create_in(uow.as_ref(), email).await?;
        cart.set_delivery_included(included);
        let saved = uow.carts().save(cart).await?;
        uow.commit().await?;
        Ok(saved)
    }

    /// Remove all items. Always saved, even when already empty.
    pub async fn clear(&self, email: &str) -> DomainResult<Cart> {
        let uow = self.repos.begin().await?;
        let mut cart = get_or_create_in(uow.as_ref(), email).await?;
        cart.clear();
        let saved = uow.carts().save(cart).await?;
        uow.commit().await?;

        info!(account_id = saved.account_id, "Cart cleared");
        Ok(saved)
    }
}

// ── Tests ──────────────────────────────────────────────────────
