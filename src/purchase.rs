//! Purchases and their line items.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::entities::{Book, Customer, Employee};
use crate::lazy::LazyRef;
use crate::shop::Shop;

/// One line of a purchase: a book and a copy count in `[1, 3]`.
#[derive(Debug, Clone)]
pub struct PurchaseItem {
    book: Arc<Book>,
    amount: u32,
}

impl PurchaseItem {
    /// Creates a line item.
    #[must_use]
    pub const fn new(book: Arc<Book>, amount: u32) -> Self {
        Self { book, amount }
    }

    /// The purchased book.
    #[must_use]
    pub const fn book(&self) -> &Arc<Book> {
        &self.book
    }

    /// Number of copies.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Line total at the book's retail price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.book.retail_price() * Decimal::from(self.amount)
    }
}

/// A completed purchase referencing, but not owning, its shop, employee,
/// and customer.
///
/// The item list is a heavy lazily-loadable field; the purchase total is
/// computed at construction so it survives eviction.
#[derive(Debug)]
pub struct Purchase {
    shop: Arc<Shop>,
    employee: Arc<Employee>,
    customer: Arc<Customer>,
    timestamp: NaiveDateTime,
    items: LazyRef<Vec<PurchaseItem>>,
    total: Decimal,
}

impl Purchase {
    /// Creates a purchase from its line items.
    #[must_use]
    pub fn new(
        shop: Arc<Shop>,
        employee: Arc<Employee>,
        customer: Arc<Customer>,
        timestamp: NaiveDateTime,
        items: Vec<PurchaseItem>,
    ) -> Self {
        let total = items.iter().map(PurchaseItem::price).sum();
        Self {
            shop,
            employee,
            customer,
            timestamp,
            items: LazyRef::new(items),
            total,
        }
    }

    /// The selling shop.
    #[must_use]
    pub const fn shop(&self) -> &Arc<Shop> {
        &self.shop
    }

    /// The employee who rang up the sale.
    #[must_use]
    pub const fn employee(&self) -> &Arc<Employee> {
        &self.employee
    }

    /// The buying customer.
    #[must_use]
    pub const fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    /// Time of sale, within the purchase's generation year.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Line items, or `None` after eviction.
    #[must_use]
    pub fn items(&self) -> Option<Arc<Vec<PurchaseItem>>> {
        self.items.get()
    }

    /// Sum of all line totals.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Drops the cached item list; the persisted copy is authoritative.
    pub fn evict(&self) {
        self.items.evict();
    }
}
