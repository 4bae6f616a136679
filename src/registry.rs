//! Shared uniqueness registry for parallel book creation.
//!
//! A single [`DedupRegistry`] is shared by every book-creation task in one
//! generation run. It enforces the two cross-cutting invariants the tasks
//! cannot uphold independently: global ISBN uniqueness and unique,
//! monotonically increasing customer ids. It also collects all accepted
//! books into the pool the shop phase samples inventories from.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::entities::Book;

/// Thread-safe registry of run-wide unique values.
///
/// Scoped to one generation run and explicitly released with
/// [`dispose`](Self::dispose) once consumed.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    isbns: Mutex<HashSet<String>>,
    books: Mutex<Vec<Arc<Book>>>,
    next_id: AtomicU64,
}

impl DedupRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically reserves an ISBN candidate.
    ///
    /// Returns `true` if the candidate was unused and is now reserved, or
    /// `false` if another task already holds it. The test and the insert
    /// happen under one lock, so no two tasks can both observe the same
    /// candidate as available.
    pub fn try_reserve(&self, candidate: &str) -> bool {
        let mut isbns = self.isbns.lock();
        if isbns.contains(candidate) {
            return false;
        }
        isbns.insert(candidate.to_owned());
        true
    }

    /// Number of reserved ISBNs.
    #[must_use]
    pub fn isbn_count(&self) -> usize {
        self.isbns.lock().len()
    }

    /// Allocates the next customer id.
    ///
    /// Ids start at 1 and are unique and strictly increasing in allocation
    /// order across all threads.
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Appends accepted books to the global pool.
    pub fn add_books(&self, books: Vec<Arc<Book>>) {
        self.books.lock().extend(books);
    }

    /// Snapshot of the global book pool.
    #[must_use]
    pub fn book_pool(&self) -> Vec<Arc<Book>> {
        self.books.lock().clone()
    }

    /// Number of books in the global pool.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.lock().len()
    }

    /// Clears all held collections to release memory promptly.
    ///
    /// The id counter is left untouched so ids stay unique even if the
    /// registry outlives its run by mistake.
    pub fn dispose(&self) {
        self.isbns.lock().clear();
        self.books.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn try_reserve_accepts_then_rejects_a_candidate() {
        let registry = DedupRegistry::new();

        assert!(registry.try_reserve("978-1-0000-0000-1"));
        assert!(!registry.try_reserve("978-1-0000-0000-1"));
        assert_eq!(registry.isbn_count(), 1);
    }

    #[test]
    fn try_reserve_admits_exactly_one_thread_per_candidate() {
        let registry = Arc::new(DedupRegistry::new());

        let accepted: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    scope.spawn(move || usize::from(registry.try_reserve("978-0-1111-2222-3")))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("thread completed"))
                .sum()
        });

        assert_eq!(accepted, 1);
    }

    #[test]
    fn next_id_starts_at_one_and_increases() {
        let registry = DedupRegistry::new();

        assert_eq!(registry.next_id(), 1);
        assert_eq!(registry.next_id(), 2);
        assert_eq!(registry.next_id(), 3);
    }

    #[test]
    fn next_id_is_unique_across_threads() {
        let registry = Arc::new(DedupRegistry::new());

        let ids: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    scope.spawn(move || (0..100).map(|_| registry.next_id()).collect::<Vec<_>>())
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("thread completed"))
                .collect()
        });

        let unique: std::collections::HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 400);
    }

    #[test]
    fn dispose_clears_isbns_and_books_but_not_the_counter() {
        let registry = DedupRegistry::new();
        registry.try_reserve("978-0-0000-0000-2");
        let _ = registry.next_id();

        registry.dispose();

        assert_eq!(registry.isbn_count(), 0);
        assert_eq!(registry.book_count(), 0);
        assert_eq!(registry.next_id(), 2);
    }
}
