//! Generic collection cell backing the per-entity stores.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::domain::Keyed;
use crate::error::Result;

/// Token identifying one fetch generation.
///
/// Issued by [`CollectionStore::begin_fetch`]; a completion presented with
/// a token older than the store's current generation is discarded, so
/// overlapping in-flight fetches cannot clobber newer state when their
/// responses resolve out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Thread-safe `{items, loading, error}` cell keyed by entity id.
#[derive(Debug)]
pub struct CollectionStore<T> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    items: RwLock<Vec<T>>,
    error: RwLock<Option<String>>,
    loading: AtomicBool,
    generation: AtomicU64,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionStore<T> {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                items: RwLock::new(Vec::new()),
                error: RwLock::new(None),
                loading: AtomicBool::new(false),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Start a fetch: marks the store loading and invalidates any fetch
    /// still in flight.
    pub fn begin_fetch(&self) -> FetchToken {
        self.inner.loading.store(true, Ordering::SeqCst);
        FetchToken(self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::SeqCst)
    }

    /// The last recorded failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.error.read().unwrap().clone()
    }

    /// Record a failure message.
    pub fn set_error(&self, message: impl Into<String>) {
        *self.inner.error.write().unwrap() = Some(message.into());
    }

    /// Clear the failure slot.
    pub fn clear_error(&self) {
        *self.inner.error.write().unwrap() = None;
    }

    /// Run a mutation, mirroring its outcome into the error slot before
    /// handing the result back to the caller.
    pub async fn track<R>(&self, op: &'static str, fut: impl Future<Output = Result<R>>) -> Result<R> {
        match fut.await {
            Ok(value) => {
                self.clear_error();
                Ok(value)
            }
            Err(err) => {
                warn!(name: "store.mutation_failed", op = op, error = %err, "mutation failed");
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }
}

impl<T: Keyed + Clone> CollectionStore<T> {
    /// Snapshot of the current items.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.inner.items.read().unwrap().clone()
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.items.read().unwrap().len()
    }

    /// Whether the cell holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<T> {
        self.inner
            .items
            .read()
            .unwrap()
            .iter()
            .find(|item| item.key() == key)
            .cloned()
    }

    /// Apply a fetch completion.
    ///
    /// Returns `false` (leaving state untouched) when a newer fetch has
    /// started since `token` was issued.
    pub fn complete_fetch(
        &self,
        token: FetchToken,
        result: std::result::Result<Vec<T>, String>,
    ) -> bool {
        if token.0 != self.inner.generation.load(Ordering::SeqCst) {
            warn!(name: "store.stale_fetch", generation = token.0, "discarding stale fetch completion");
            return false;
        }
        match result {
            Ok(items) => {
                *self.inner.items.write().unwrap() = items;
                self.clear_error();
            }
            Err(message) => self.set_error(message),
        }
        self.inner.loading.store(false, Ordering::SeqCst);
        true
    }

    /// Append an item, replacing any existing entry with the same id so
    /// the list stays id-unique.
    pub fn upsert(&self, item: T) {
        let mut items = self.inner.items.write().unwrap();
        if let Some(existing) = items.iter_mut().find(|i| i.key() == item.key()) {
            *existing = item;
        } else {
            items.push(item);
        }
    }

    /// Replace the entry with the same id; items without a match are left
    /// alone (the next refresh reconciles them).
    pub fn replace(&self, item: T) {
        let mut items = self.inner.items.write().unwrap();
        if let Some(existing) = items.iter_mut().find(|i| i.key() == item.key()) {
            *existing = item;
        }
    }

    /// Filter out the entry with the given id.
    pub fn remove(&self, key: i64) {
        self.inner.items.write().unwrap().retain(|i| i.key() != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        label: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn test_upsert_keeps_ids_unique() {
        let store = CollectionStore::new();
        store.upsert(Item { id: 1, label: "a" });
        store.upsert(Item { id: 2, label: "b" });
        store.upsert(Item { id: 1, label: "a2" });

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().label, "a2");
    }

    #[test]
    fn test_replace_ignores_missing_id() {
        let store = CollectionStore::new();
        store.upsert(Item { id: 1, label: "a" });
        store.replace(Item { id: 9, label: "ghost" });

        assert_eq!(store.len(), 1);
        assert!(store.get(9).is_none());
    }

    #[test]
    fn test_remove_filters_out() {
        let store = CollectionStore::new();
        store.upsert(Item { id: 1, label: "a" });
        store.upsert(Item { id: 2, label: "b" });
        store.remove(1);

        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_stale_fetch_completion_is_discarded() {
        let store = CollectionStore::new();

        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(store.complete_fetch(second, Ok(vec![Item { id: 2, label: "new" }])));
        // The older fetch resolves afterwards; it must not win.
        assert!(!store.complete_fetch(first, Ok(vec![Item { id: 1, label: "old" }])));

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_fetch_failure_lands_in_error_slot() {
        let store: CollectionStore<Item> = CollectionStore::new();
        let token = store.begin_fetch();
        assert!(store.complete_fetch(token, Err("backend unreachable".to_string())));

        assert_eq!(store.error().unwrap(), "backend unreachable");
        assert!(!store.is_loading());

        // A later success clears it.
        let token = store.begin_fetch();
        store.complete_fetch(token, Ok(Vec::new()));
        assert!(store.error().is_none());
    }
}
