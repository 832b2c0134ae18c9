//! In-memory store for development and testing

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    Account, AccountRepository, Cart, CartRepository, DomainResult, Product, ProductRepository,
    Repositories, RepositoryProvider, UnitOfWork,
};
use crate::infrastructure::seed::{seed_products, SEED_ACCOUNTS};

#[derive(Default)]
struct Tables {
    /// Keyed by email
    accounts: DashMap<String, Account>,
    products: DashMap<i64, Product>,
    carts: DashMap<i64, Cart>,
    account_counter: AtomicI64,
    cart_saves: AtomicUsize,
}

impl Tables {
    fn record_save(&self) {
        self.cart_saves.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountRepository for Tables {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        Ok(self.accounts.get(email).map(|a| a.clone()))
    }
}

#[async_trait]
impl ProductRepository for Tables {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self.products.iter().map(|p| p.clone()).collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }
}

#[async_trait]
impl CartRepository for Tables {
    async fn find_by_account_id(&self, account_id: i64) -> DomainResult<Option<Cart>> {
        Ok(self.carts.get(&account_id).map(|c| c.clone()))
    }

    async fn save(&self, cart: Cart) -> DomainResult<Cart> {
        self.record_save();
        self.carts.insert(cart.account_id, cart.clone());
        Ok(cart)
    }
}

/// In-memory store.
///
/// Cheap to clone; clones share the same tables. Every `CartRepository::save`
/// call is counted, including saves staged in a unit of work.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Tables>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the default accounts and catalog.
    pub fn seeded() -> Self {
        let storage = Self::new();
        for (id, email, name) in SEED_ACCOUNTS {
            storage.insert_account(Account {
                id,
                email: email.to_string(),
                name: name.to_string(),
                active: true,
                created_at: Utc::now(),
            });
        }
        for product in seed_products() {
            storage.add_product(product);
        }
        storage
    }

    /// Register a new account and return it with its assigned id.
    pub fn add_account(&self, email: &str, name: &str) -> Account {
        let id = self.tables.account_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let account = Account {
            id,
            email: email.to_string(),
            name: name.to_string(),
            active: true,
            created_at: Utc::now(),
        };
        self.insert_account(account.clone());
        account
    }

    fn insert_account(&self, account: Account) {
        self.tables
            .account_counter
            .fetch_max(account.id, Ordering::SeqCst);
        self.tables.accounts.insert(account.email.clone(), account);
    }

    pub fn add_product(&self, product: Product) {
        self.tables.products.insert(product.id, product);
    }

    /// Number of `save` calls made on the cart repository so far.
    pub fn cart_save_count(&self) -> usize {
        self.tables.cart_saves.load(Ordering::SeqCst)
    }

    /// Committed state of an account's cart.
    pub fn stored_cart(&self, account_id: i64) -> Option<Cart> {
        self.tables.carts.get(&account_id).map(|c| c.clone())
    }

    pub fn cart_count(&self) -> usize {
        self.tables.carts.len()
    }
}

impl Repositories for InMemoryStorage {
    fn accounts(&self) -> &dyn AccountRepository {
        self.tables.as_ref()
    }

    fn products(&self) -> &dyn ProductRepository {
        self.tables.as_ref()
    }

    fn carts(&self) -> &dyn CartRepository {
        self.tables.as_ref()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryStorage {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(InMemoryUnitOfWork {
            tables: Arc::clone(&self.tables),
            staged: DashMap::new(),
        }))
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// Unit of work over [`InMemoryStorage`].
///
/// Cart writes are staged and only become visible to other readers on commit.
pub struct InMemoryUnitOfWork {
    tables: Arc<Tables>,
    staged: DashMap<i64, Cart>,
}

#[async_trait]
impl CartRepository for InMemoryUnitOfWork {
    async fn find_by_account_id(&self, account_id: i64) -> DomainResult<Option<Cart>> {
        if let Some(cart) = self.staged.get(&account_id) {
            return Ok(Some(cart.clone()));
        }
        self.tables.find_by_account_id(account_id).await
    }

    async fn save(&self, cart: Cart) -> DomainResult<Cart> {
        self.tables.record_save();
        self.staged.insert(cart.account_id, cart.clone());
        Ok(cart)
    }
}

impl Repositories for InMemoryUnitOfWork {
    fn accounts(&self) -> &dyn AccountRepository {
        self.tables.as_ref()
    }

    fn products(&self) -> &dyn ProductRepository {
        self.tables.as_ref()
    }

    fn carts(&self) -> &dyn CartRepository {
        self
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let this = *self;
        for (account_id, cart) in this.staged {
            this.tables.carts.insert(account_id, cart);
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_accounts_and_catalog() {
        let storage = InMemoryStorage::seeded();
        let admin = storage
            .accounts()
            .find_by_email("admin@market.local")
            .await
            .unwrap();
        assert_eq!(admin.map(|a| a.id), Some(1));
        assert_eq!(storage.products().find_all().await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn add_account_continues_after_seeded_ids() {
        let storage = InMemoryStorage::seeded();
        let account = storage.add_account("new@market.local", "New");
        assert_eq!(account.id, 3);
    }

    #[tokio::test]
    async fn unit_of_work_writes_are_invisible_until_commit() {
        let storage = InMemoryStorage::new();
        let uow = storage.begin().await.unwrap();
        uow.carts().save(Cart::new(5)).await.unwrap();

        assert!(uow.carts().find_by_account_id(5).await.unwrap().is_some());
        assert!(storage.stored_cart(5).is_none());

        uow.commit().await.unwrap();
        assert!(storage.stored_cart(5).is_some());
        assert_eq!(storage.cart_save_count(), 1);
    }

    #[tokio::test]
    async fn dropped_unit_of_work_discards_writes() {
        let storage = InMemoryStorage::new();
        {
            let uow = storage.begin().await.unwrap();
            uow.carts().save(Cart::new(5)).await.unwrap();
        }
        assert!(storage.stored_cart(5).is_none());
        assert_eq!(storage.cart_count(), 0);
    }
}
