//! Evictable cache cell for heavy entity fields.
//!
//! The durable store owns the authoritative copy of heavy sub-structures
//! (inventories, purchase item lists). In memory they live behind a
//! [`LazyRef`] so a repository's eviction pass can drop them without
//! touching entity count or identity. Reloading on demand is the store's
//! responsibility; after eviction the core simply reports the value as
//! absent.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// A cache cell holding an optionally loaded value.
pub struct LazyRef<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> LazyRef<T> {
    /// Creates a cell with the value loaded.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Mutex::new(Some(Arc::new(value))),
        }
    }

    /// Returns the cached value, or `None` after eviction.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.lock().clone()
    }

    /// Returns whether a value is currently cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Drops the cached value. Identity of the owning entity is unaffected.
    pub fn evict(&self) {
        *self.slot.lock() = None;
    }
}

impl<T> fmt::Debug for LazyRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_loaded() { "loaded" } else { "evicted" };
        f.debug_tuple("LazyRef").field(&state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_the_loaded_value() {
        let cell = LazyRef::new(42);
        assert_eq!(cell.get().as_deref(), Some(&42));
        assert!(cell.is_loaded());
    }

    #[test]
    fn evict_drops_the_value() {
        let cell = LazyRef::new(String::from("heavy"));
        cell.evict();

        assert!(cell.get().is_none());
        assert!(!cell.is_loaded());
    }

    #[test]
    fn evict_is_idempotent() {
        let cell = LazyRef::new(1);
        cell.evict();
        cell.evict();
        assert!(cell.get().is_none());
    }

    #[test]
    fn existing_handles_survive_eviction() {
        let cell = LazyRef::new(vec![1, 2, 3]);
        let handle = cell.get().expect("loaded");
        cell.evict();

        assert_eq!(handle.len(), 3);
    }
}
