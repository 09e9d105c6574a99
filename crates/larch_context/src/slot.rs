//! Per-artifact memoizing cells.

use std::sync::{Arc, Mutex};

/// A memoizing cell holding one artifact of a document.
///
/// The cell's mutex is held for the duration of a computation, so concurrent
/// first-access callers for the same artifact block until the single
/// in-flight computation finishes and then share its `Arc`. Unrelated
/// artifacts use unrelated cells and never serialize against each other.
///
/// Retention is soft in the sense that a value may be dropped between any
/// two accesses (by invalidation or a heavy-data release); the next access
/// transparently recomputes. Failed computations are never stored: the error
/// propagates to the caller and a later access retries.
pub(crate) struct Slot<T> {
    value: Mutex<Option<Arc<T>>>,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    /// Returns the cached value, computing and storing it first if absent.
    pub(crate) fn get_or_try_compute<E>(
        &self,
        compute: impl FnOnce() -> Result<Arc<T>, E>,
    ) -> Result<Arc<T>, E> {
        let mut slot = self.value.lock().unwrap();
        if let Some(value) = slot.as_ref() {
            return Ok(Arc::clone(value));
        }
        let value = compute()?;
        *slot = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Infallible variant of [`get_or_try_compute`](Self::get_or_try_compute).
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> Arc<T>) -> Arc<T> {
        let mut slot = self.value.lock().unwrap();
        if let Some(value) = slot.as_ref() {
            return Arc::clone(value);
        }
        let value = compute();
        *slot = Some(Arc::clone(&value));
        value
    }

    /// Returns the cached value without triggering computation.
    pub(crate) fn peek(&self) -> Option<Arc<T>> {
        self.value.lock().unwrap().clone()
    }

    /// Drops the cached value, if any.
    pub(crate) fn invalidate(&self) {
        *self.value.lock().unwrap() = None;
    }

    /// Returns `true` if a value is currently cached.
    pub(crate) fn is_cached(&self) -> bool {
        self.value.lock().unwrap().is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn computes_once() {
        let slot: Slot<u32> = Slot::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Arc::new(7)
        };
        let first = slot.get_or_compute(compute);
        let second = slot.get_or_compute(compute);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let slot: Slot<u32> = Slot::new();
        let first = slot.get_or_compute(|| Arc::new(1));
        slot.invalidate();
        assert!(!slot.is_cached());
        let second = slot.get_or_compute(|| Arc::new(2));
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*second, 2);
    }

    #[test]
    fn peek_never_computes() {
        let slot: Slot<u32> = Slot::new();
        assert!(slot.peek().is_none());
        slot.get_or_compute(|| Arc::new(3));
        assert_eq!(*slot.peek().unwrap(), 3);
    }

    #[test]
    fn failure_is_not_cached() {
        let slot: Slot<u32> = Slot::new();
        let failed: Result<Arc<u32>, &str> = slot.get_or_try_compute(|| Err("boom"));
        assert_eq!(failed.unwrap_err(), "boom");
        assert!(!slot.is_cached());

        let ok: Result<Arc<u32>, Infallible> = slot.get_or_try_compute(|| Ok(Arc::new(4)));
        assert_eq!(*ok.unwrap(), 4);
    }
}
