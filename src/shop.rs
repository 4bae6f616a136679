//! Shops and their inventories.

use std::sync::Arc;

use crate::entities::{Address, Book, Employee};
use crate::lazy::LazyRef;

/// A retail shop owning its address, employees, and inventory.
///
/// The inventory is a heavy lazily-loadable field: a repository eviction
/// pass may drop it to reclaim memory without affecting the shop's
/// identity.
#[derive(Debug)]
pub struct Shop {
    name: String,
    address: Address,
    employees: Vec<Arc<Employee>>,
    inventory: LazyRef<Inventory>,
}

impl Shop {
    /// Creates a shop with a loaded inventory.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: Address,
        employees: Vec<Arc<Employee>>,
        inventory: Inventory,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            employees,
            inventory: LazyRef::new(inventory),
        }
    }

    /// Display name, e.g. "Lyon Shop 0".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shop address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Employees in hiring order.
    #[must_use]
    pub fn employees(&self) -> &[Arc<Employee>] {
        &self.employees
    }

    /// The shop's inventory, or `None` after eviction.
    #[must_use]
    pub fn inventory(&self) -> Option<Arc<Inventory>> {
        self.inventory.get()
    }

    /// Drops the cached inventory; the persisted copy is authoritative.
    pub fn evict(&self) {
        self.inventory.evict();
    }
}

/// A shop's on-hand stock: distinct books, each with one positive quantity.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<(Arc<Book>, u32)>,
}

impl Inventory {
    /// Creates an inventory from (book, quantity) entries.
    ///
    /// Callers are responsible for supplying distinct books and quantities
    /// in `[1, 50]`; the generator guarantees both.
    #[must_use]
    pub fn new(entries: Vec<(Arc<Book>, u32)>) -> Self {
        Self { entries }
    }

    /// All (book, quantity) entries.
    #[must_use]
    pub fn entries(&self) -> &[(Arc<Book>, u32)] {
        &self.entries
    }

    /// The distinct books in stock.
    #[must_use]
    pub fn books(&self) -> Vec<Arc<Book>> {
        self.entries.iter().map(|(book, _)| Arc::clone(book)).collect()
    }

    /// Number of distinct books in stock.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    /// On-hand quantity of the book with the given ISBN, if stocked.
    #[must_use]
    pub fn amount_of(&self, isbn: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(book, _)| book.isbn() == isbn)
            .map(|(_, amount)| *amount)
    }
}

/// One flattened inventory row: a shop stocking a book in some quantity.
///
/// Produced by [`Shops::compute_inventory`].
///
/// [`Shops::compute_inventory`]: crate::Shops::compute_inventory
#[derive(Debug, Clone)]
pub struct InventoryItem {
    shop: Arc<Shop>,
    book: Arc<Book>,
    amount: u32,
}

impl InventoryItem {
    /// Creates an inventory row.
    #[must_use]
    pub const fn new(shop: Arc<Shop>, book: Arc<Book>, amount: u32) -> Self {
        Self { shop, book, amount }
    }

    /// The stocking shop.
    #[must_use]
    pub const fn shop(&self) -> &Arc<Shop> {
        &self.shop
    }

    /// The stocked book.
    #[must_use]
    pub const fn book(&self) -> &Arc<Book> {
        &self.book
    }

    /// On-hand quantity.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::entities::{Author, City, Country, Genre, Language, Publisher, State};

    use super::*;

    fn address() -> Address {
        let country = Arc::new(Country::new("France", "FR"));
        let state = Arc::new(State::new("Rhone", country));
        let city = Arc::new(City::new("Lyon", state));
        Address::new("3 Rue Neuve", "2e etage", "69001", city)
    }

    fn book(isbn: &str) -> Arc<Book> {
        Arc::new(Book::new(
            isbn,
            "Some Title",
            Arc::new(Author::new("A Writer", address())),
            Arc::new(Genre::new("Novel")),
            Arc::new(Publisher::new("Presses Unies", address())),
            Arc::new(Language::new("fr-FR")),
            Decimal::new(900, 2),
            Decimal::new(999, 2),
        ))
    }

    fn shop() -> Shop {
        let inventory = Inventory::new(vec![(book("9780000000001"), 4), (book("9780000000002"), 50)]);
        Shop::new("Lyon Shop 0", address(), vec![], inventory)
    }

    #[test]
    fn inventory_reports_amount_by_isbn() {
        let shop = shop();
        let inventory = shop.inventory().expect("loaded");

        assert_eq!(inventory.slot_count(), 2);
        assert_eq!(inventory.amount_of("9780000000002"), Some(50));
        assert_eq!(inventory.amount_of("9780000000099"), None);
    }

    #[test]
    fn eviction_drops_inventory_but_keeps_identity() {
        let shop = shop();
        shop.evict();

        assert!(shop.inventory().is_none());
        assert_eq!(shop.name(), "Lyon Shop 0");
    }
}
