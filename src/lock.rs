//! Reader/writer-locked container primitive.
//!
//! Every typed repository wraps its backing collection in a [`LockScope`]
//! so mutation and persistence hand-off are observed atomically by
//! concurrent readers.

use parking_lot::RwLock;

/// A reader/writer lock around one mutable collection.
///
/// Any number of `read` calls proceed concurrently; a `write` call
/// excludes all other access. The lock is released on every exit path,
/// including when the wrapped closure panics (the guard unlocks during
/// unwinding). No reentrancy, no timeout, and no fairness guarantee
/// beyond `parking_lot`'s defaults.
///
/// # Example
///
/// ```
/// use bookstore_data::LockScope;
///
/// let scope = LockScope::new(vec![1, 2, 3]);
/// scope.write(|values| values.push(4));
/// let len = scope.read(Vec::len);
/// assert_eq!(len, 4);
/// ```
#[derive(Debug, Default)]
pub struct LockScope<C> {
    inner: RwLock<C>,
}

impl<C> LockScope<C> {
    /// Wraps a collection in a lock scope.
    #[must_use]
    pub const fn new(collection: C) -> Self {
        Self {
            inner: RwLock::new(collection),
        }
    }

    /// Runs a side-effect-free query under shared access.
    pub fn read<T>(&self, query: impl FnOnce(&C) -> T) -> T {
        query(&self.inner.read())
    }

    /// Runs a mutation under exclusive access.
    pub fn write<T>(&self, mutation: impl FnOnce(&mut C) -> T) -> T {
        mutation(&mut self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn reads_observe_writes() {
        let scope = LockScope::new(Vec::new());
        scope.write(|values| values.extend([1, 2, 3]));

        assert_eq!(scope.read(Vec::len), 3);
    }

    #[test]
    fn concurrent_readers_do_not_block_each_other() {
        let scope = Arc::new(LockScope::new(vec![1, 2, 3]));

        thread::scope(|s| {
            for _ in 0..4 {
                let scope = Arc::clone(&scope);
                s.spawn(move || {
                    for _ in 0..1000 {
                        assert_eq!(scope.read(Vec::len), 3);
                    }
                });
            }
        });
    }

    #[test]
    fn readers_never_observe_a_partial_append() {
        let scope = Arc::new(LockScope::new(Vec::new()));
        let batch: Vec<u32> = (0..1000).collect();

        thread::scope(|s| {
            let writer_scope = Arc::clone(&scope);
            let writer_batch = batch.clone();
            s.spawn(move || {
                writer_scope.write(|values| values.extend(writer_batch));
            });

            for _ in 0..4 {
                let scope = Arc::clone(&scope);
                s.spawn(move || {
                    for _ in 0..1000 {
                        let len = scope.read(Vec::len);
                        assert!(len == 0 || len == 1000, "partial append visible: {len}");
                    }
                });
            }
        });
    }

    #[test]
    fn lock_is_released_when_a_write_panics() {
        let scope = LockScope::new(vec![1]);

        let result = catch_unwind(AssertUnwindSafe(|| {
            scope.write(|_| panic!("mutation failed"));
        }));
        assert!(result.is_err());

        // A poison-free lock stays usable after the panic.
        assert_eq!(scope.read(Vec::len), 1);
    }
}
