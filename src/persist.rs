//! Persistence hand-off capability.
//!
//! The durable store is an external collaborator; the core only needs a
//! "store this subtree" operation. Repositories invoke it inside their
//! write-lock critical sections so appended state and persisted state are
//! observed together.

use std::sync::Arc;

use crate::entities::{Book, Customer};
use crate::error::PersistenceError;
use crate::purchase::Purchase;
use crate::shop::Shop;

/// An aggregate root handed to the store.
///
/// Borrows the repository's backing collection for the duration of the
/// call; the store may be invoked repeatedly for the same root to
/// represent incremental changes.
#[derive(Debug, Clone, Copy)]
pub enum StorageRoot<'a> {
    /// The full book collection.
    Books(&'a [Arc<Book>]),
    /// The full shop collection.
    Shops(&'a [Arc<Shop>]),
    /// The full customer collection.
    Customers(&'a [Arc<Customer>]),
    /// One year's purchase batch.
    Purchases {
        /// Generation year of the batch.
        year: i32,
        /// The purchases of that year.
        purchases: &'a [Arc<Purchase>],
    },
}

impl StorageRoot<'_> {
    /// Stable name of the aggregate root, used in error reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Books(_) => "books",
            Self::Shops(_) => "shops",
            Self::Customers(_) => "customers",
            Self::Purchases { .. } => "purchases",
        }
    }
}

/// Capability to durably persist an aggregate root.
///
/// Assumed idempotent from the core's perspective; the core manages no
/// transaction boundary. A failure propagates out of the repository
/// operation that triggered the hand-off, and the repository's in-memory
/// state may already reflect the mutation at that point.
pub trait Persister: Send + Sync {
    /// Durably persists the given subtree.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the subtree could not be stored.
    fn store(&self, root: StorageRoot<'_>) -> Result<(), PersistenceError>;
}

/// A persister that accepts every hand-off and stores nothing.
///
/// Useful for in-memory runs and tests that only care about the generated
/// dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardPersister;

impl Persister for DiscardPersister {
    fn store(&self, _root: StorageRoot<'_>) -> Result<(), PersistenceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_roots_report_stable_names() {
        assert_eq!(StorageRoot::Books(&[]).name(), "books");
        assert_eq!(StorageRoot::Shops(&[]).name(), "shops");
        assert_eq!(StorageRoot::Customers(&[]).name(), "customers");
        assert_eq!(
            StorageRoot::Purchases {
                year: 2020,
                purchases: &[]
            }
            .name(),
            "purchases"
        );
    }

    #[test]
    fn discard_persister_accepts_everything() {
        let persister = DiscardPersister;
        assert!(persister.store(StorageRoot::Books(&[])).is_ok());
    }
}
