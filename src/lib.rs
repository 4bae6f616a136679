//! Synthetic bookstore dataset generation.
//!
//! This crate generates a complete, internally consistent bookstore domain
//! model: countries with cities and customers, a worldwide book catalogue
//! with globally unique ISBNs, per-city shops with stocked inventories, and
//! years of purchase history. Volumes are driven by an [`AmountProfile`];
//! generation fans out over countries, cities, and shops with `rayon` and
//! remains volume-reproducible for a fixed seed.
//!
//! Generated entities land in four lockable repositories ([`Books`],
//! [`Shops`], [`Customers`], [`Purchases`]) that readers can query
//! concurrently while generation is still appending. An optional
//! [`Persister`] receives every appended aggregate root inside the same
//! critical section as the append itself.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bookstore_data::{
//!     AmountProfile, Books, Customers, DatasetGenerator, DiscardPersister, Purchases, Shops,
//! };
//!
//! # fn main() -> Result<(), bookstore_data::GenerationError> {
//! let books = Arc::new(Books::new());
//! let shops = Arc::new(Shops::new());
//! let customers = Arc::new(Customers::new());
//! let purchases = Arc::new(Purchases::new());
//!
//! let generator = DatasetGenerator::new(
//!     Arc::clone(&books),
//!     Arc::clone(&shops),
//!     Arc::clone(&customers),
//!     Arc::clone(&purchases),
//!     AmountProfile::medium(),
//!     Arc::new(DiscardPersister),
//! )
//! .with_seed(42);
//!
//! let metrics = generator.generate()?;
//! println!("{metrics}");
//! # Ok(())
//! # }
//! ```

pub mod country_model;
pub mod entities;
pub mod error;
pub mod generator;
pub mod lazy;
pub mod lock;
pub mod persist;
pub mod profile;
pub mod provider;
pub mod purchase;
pub mod registry;
pub mod repository;
pub mod shop;

pub use country_model::CountryModel;
pub use entities::{
    Address, Author, Book, City, Country, Customer, Employee, Genre, Language, Publisher, State,
};
pub use error::{GenerationError, PersistenceError, ProfileError};
pub use generator::{DatasetGenerator, DatasetMetrics};
pub use lazy::LazyRef;
pub use lock::LockScope;
pub use persist::{DiscardPersister, Persister, StorageRoot};
pub use profile::{AmountProfile, UNLIMITED_COUNTRIES};
pub use provider::{FakeData, Locale};
pub use purchase::{Purchase, PurchaseItem};
pub use registry::DedupRegistry;
pub use repository::{Books, Customers, Purchases, Shops};
pub use shop::{Inventory, InventoryItem, Shop};
