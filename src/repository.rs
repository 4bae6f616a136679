//! Typed, lockable entity repositories.
//!
//! Each repository wraps its backing collection in a [`LockScope`] and
//! follows one pattern: `add`/`add_all` append and persist inside a single
//! write-lock critical section, queries run under shared access, and
//! `clear` evicts heavy lazily-loadable fields without changing entity
//! count or identity. There is no cross-repository transaction; each
//! repository is its own critical section.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rayon::prelude::*;

use crate::entities::{Book, Customer};
use crate::error::PersistenceError;
use crate::lock::LockScope;
use crate::persist::{Persister, StorageRoot};
use crate::purchase::Purchase;
use crate::shop::{InventoryItem, Shop};

/// All books in print, keyed by globally unique ISBN.
#[derive(Debug, Default)]
pub struct Books {
    scope: LockScope<Vec<Arc<Book>>>,
}

impl Books {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one book and persists the collection in one critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory append
    /// is not rolled back.
    pub fn add(&self, book: Arc<Book>, persister: &dyn Persister) -> Result<(), PersistenceError> {
        self.scope.write(|books| {
            books.push(book);
            persister.store(StorageRoot::Books(books))
        })
    }

    /// Appends a batch of books and persists the collection in one
    /// critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory append
    /// is not rolled back.
    pub fn add_all(
        &self,
        batch: Vec<Arc<Book>>,
        persister: &dyn Persister,
    ) -> Result<(), PersistenceError> {
        self.scope.write(|books| {
            books.extend(batch);
            persister.store(StorageRoot::Books(books))
        })
    }

    /// Total number of books.
    #[must_use]
    pub fn count(&self) -> usize {
        self.scope.read(Vec::len)
    }

    /// Defensive snapshot of all books.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Book>> {
        self.scope.read(Vec::clone)
    }

    /// Cache-eviction pass. Books carry no lazily-loadable fields, so this
    /// only exists for parity with the repository pattern.
    pub fn clear(&self) {
        self.scope.write(|_| {});
    }

    /// Runs an aggregation over a parallel view of the books.
    pub fn compute<T>(&self, query: impl FnOnce(rayon::slice::Iter<'_, Arc<Book>>) -> T) -> T {
        self.scope.read(|books| query(books.par_iter()))
    }

    /// First book whose title matches, or `None`.
    #[must_use]
    pub fn of_name(&self, title: &str) -> Option<Arc<Book>> {
        self.scope.read(|books| {
            books
                .iter()
                .find(|book| book.title() == title)
                .map(Arc::clone)
        })
    }

    /// The book with the given ISBN, or `None`.
    #[must_use]
    pub fn of_isbn(&self, isbn: &str) -> Option<Arc<Book>> {
        self.scope.read(|books| {
            books
                .iter()
                .find(|book| book.isbn() == isbn)
                .map(Arc::clone)
        })
    }
}

/// All retail shops, their employees, and inventories.
#[derive(Debug, Default)]
pub struct Shops {
    scope: LockScope<Vec<Arc<Shop>>>,
}

impl Shops {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one shop and persists the collection in one critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory append
    /// is not rolled back.
    pub fn add(&self, shop: Arc<Shop>, persister: &dyn Persister) -> Result<(), PersistenceError> {
        self.scope.write(|shops| {
            shops.push(shop);
            persister.store(StorageRoot::Shops(shops))
        })
    }

    /// Appends a batch of shops and persists the collection in one
    /// critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory append
    /// is not rolled back.
    pub fn add_all(
        &self,
        batch: Vec<Arc<Shop>>,
        persister: &dyn Persister,
    ) -> Result<(), PersistenceError> {
        self.scope.write(|shops| {
            shops.extend(batch);
            persister.store(StorageRoot::Shops(shops))
        })
    }

    /// Total number of shops.
    #[must_use]
    pub fn count(&self) -> usize {
        self.scope.read(Vec::len)
    }

    /// Defensive snapshot of all shops.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Shop>> {
        self.scope.read(Vec::clone)
    }

    /// Evicts every shop's cached inventory. Shop count and identity are
    /// unchanged; the persisted copies remain loadable by the store.
    pub fn clear(&self) {
        self.scope.write(|shops| {
            for shop in shops.iter() {
                shop.evict();
            }
        });
    }

    /// Runs an aggregation over a parallel view of the shops.
    pub fn compute<T>(&self, query: impl FnOnce(rayon::slice::Iter<'_, Arc<Shop>>) -> T) -> T {
        self.scope.read(|shops| query(shops.par_iter()))
    }

    /// Runs an aggregation over a parallel view of flattened inventory
    /// rows, one per (shop, book, quantity) triple. Shops whose inventory
    /// has been evicted contribute no rows.
    pub fn compute_inventory<T>(
        &self,
        query: impl FnOnce(rayon::vec::IntoIter<InventoryItem>) -> T,
    ) -> T {
        self.scope.read(|shops| {
            let items: Vec<InventoryItem> = shops
                .iter()
                .filter_map(|shop| {
                    shop.inventory()
                        .map(|inventory| (Arc::clone(shop), inventory))
                })
                .flat_map(|(shop, inventory)| {
                    inventory
                        .entries()
                        .iter()
                        .map(|(book, amount)| {
                            InventoryItem::new(Arc::clone(&shop), Arc::clone(book), *amount)
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            query(items.into_par_iter())
        })
    }

    /// First shop whose name matches, or `None`.
    #[must_use]
    pub fn of_name(&self, name: &str) -> Option<Arc<Shop>> {
        self.scope.read(|shops| {
            shops
                .iter()
                .find(|shop| shop.name() == name)
                .map(Arc::clone)
        })
    }
}

/// All customers that ever purchased, deduplicated by id.
#[derive(Debug, Default)]
pub struct Customers {
    scope: LockScope<Vec<Arc<Customer>>>,
}

impl Customers {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of customers and persists the collection in one
    /// critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory append
    /// is not rolled back.
    pub fn add_all(
        &self,
        batch: Vec<Arc<Customer>>,
        persister: &dyn Persister,
    ) -> Result<(), PersistenceError> {
        self.scope.write(|customers| {
            customers.extend(batch);
            persister.store(StorageRoot::Customers(customers))
        })
    }

    /// Total number of customers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.scope.read(Vec::len)
    }

    /// Defensive snapshot of all customers.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Customer>> {
        self.scope.read(Vec::clone)
    }

    /// Cache-eviction pass. Customers carry no lazily-loadable fields, so
    /// this only exists for parity with the repository pattern.
    pub fn clear(&self) {
        self.scope.write(|_| {});
    }

    /// Runs an aggregation over a parallel view of the customers.
    pub fn compute<T>(
        &self,
        query: impl FnOnce(rayon::slice::Iter<'_, Arc<Customer>>) -> T,
    ) -> T {
        self.scope.read(|customers| query(customers.par_iter()))
    }

    /// First customer whose name matches, or `None`.
    #[must_use]
    pub fn of_name(&self, name: &str) -> Option<Arc<Customer>> {
        self.scope.read(|customers| {
            customers
                .iter()
                .find(|customer| customer.name() == name)
                .map(Arc::clone)
        })
    }
}

/// All purchases, grouped by generation year.
#[derive(Debug, Default)]
pub struct Purchases {
    scope: LockScope<BTreeMap<i32, Vec<Arc<Purchase>>>>,
}

impl Purchases {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-inserts one year's batch, persists it, and returns the
    /// distinct customers referenced by that batch — not by the whole
    /// year. Insert and hand-off share one write-lock critical section.
    ///
    /// # Errors
    ///
    /// Propagates [`PersistenceError`] from the store; the in-memory insert
    /// is not rolled back.
    pub fn init(
        &self,
        year: i32,
        purchases: Vec<Arc<Purchase>>,
        persister: &dyn Persister,
    ) -> Result<HashSet<Arc<Customer>>, PersistenceError> {
        let referenced = purchases
            .iter()
            .map(|purchase| Arc::clone(purchase.customer()))
            .collect();
        self.scope.write(|by_year| {
            let slot = by_year.entry(year).or_default();
            slot.extend(purchases);
            persister.store(StorageRoot::Purchases {
                year,
                purchases: slot,
            })?;
            Ok(referenced)
        })
    }

    /// Total number of purchases across all years.
    #[must_use]
    pub fn count(&self) -> usize {
        self.scope
            .read(|by_year| by_year.values().map(Vec::len).sum())
    }

    /// Years with at least one purchase, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.scope.read(|by_year| by_year.keys().copied().collect())
    }

    /// Defensive snapshot of one year's purchases.
    #[must_use]
    pub fn of_year(&self, year: i32) -> Vec<Arc<Purchase>> {
        self.scope
            .read(|by_year| by_year.get(&year).cloned().unwrap_or_default())
    }

    /// Defensive snapshot of all purchases across all years.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Purchase>> {
        self.scope
            .read(|by_year| by_year.values().flatten().map(Arc::clone).collect())
    }

    /// Evicts every purchase's cached item list. Purchase count and
    /// identity are unchanged.
    pub fn clear(&self) {
        self.scope.write(|by_year| {
            for purchase in by_year.values().flatten() {
                purchase.evict();
            }
        });
    }

    /// Runs an aggregation over a parallel view of all purchases.
    pub fn compute<T>(
        &self,
        query: impl FnOnce(rayon::vec::IntoIter<Arc<Purchase>>) -> T,
    ) -> T {
        self.scope.read(|by_year| {
            let purchases: Vec<Arc<Purchase>> =
                by_year.values().flatten().map(Arc::clone).collect();
            query(purchases.into_par_iter())
        })
    }
}
