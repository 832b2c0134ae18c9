//! Cart domain entity

use std::collections::BTreeMap;

use crate::domain::Product;

/// A cart line: one product and how many of it
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> i64 {
        self.product.id
    }
}

/// Shopping cart owned by a single account.
///
/// Lines are unique by product and kept ordered by product id.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub account_id: i64,
    pub delivery_included: bool,
    items: BTreeMap<i64, CartItem>,
}

impl Cart {
    /// Empty cart without delivery.
    pub fn new(account_id: i64) -> Self {
        Self {
            account_id,
            delivery_included: false,
            items: BTreeMap::new(),
        }
    }

    /// Rebuild a cart from stored lines. Lines with a non-positive quantity are dropped.
    pub fn with_items(
        account_id: i64,
        delivery_included: bool,
        items: impl IntoIterator<Item = CartItem>,
    ) -> Self {
        let items = items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .map(|item| (item.product_id(), item))
            .collect();
        Self {
            account_id,
            delivery_included,
            items,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn item(&self, product_id: i64) -> Option<&CartItem> {
        self.items.get(&product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines
    pub fn items_count(&self) -> i64 {
        self.items.values().map(|i| i64::from(i.quantity)).sum()
    }

    /// Merge `quantity` units of `product` into the cart.
    ///
    /// An existing line is incremented; otherwise a new line is added. A line
    /// whose resulting quantity is zero or less is removed.
    pub fn update(&mut self, product: &Product, quantity: i32) {
        let current = self.items.get(&product.id).map_or(0, |i| i.quantity);
        let merged = current.saturating_add(quantity);
        if merged <= 0 {
            self.items.remove(&product.id);
        } else {
            self.items
                .insert(product.id, CartItem::new(product.clone(), merged));
        }
    }

    pub fn set_delivery_included(&mut self, included: bool) {
        self.delivery_included = included;
    }

    /// Remove every line. Identity and delivery flag are kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// ── Tests ──────────────────────────────────────────────────────
