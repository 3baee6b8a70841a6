// ── Ordered entity cache ──
//
// Insertion-ordered storage for one entity type with push-based change
// notification via `watch` channels. Ordering matters: list views must
// show records exactly as the server returned them.

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tokio::sync::watch;

/// An insertion-ordered cache for a single entity type, keyed by id.
///
/// Owned exclusively by an `EntityStore`; consumers read through snapshots
/// or `watch` subscriptions and never mutate directly. Every mutation bumps
/// a version counter and rebuilds the snapshot subscribers receive.
pub struct EntityCache<T: Clone + Send + Sync + 'static> {
    /// Primary storage: id -> record, in insertion order.
    records: RwLock<IndexMap<i64, Arc<T>>>,

    /// Version counter, bumped on every mutation.
    version: watch::Sender<u64>,

    /// Full snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityCache<T> {
    pub fn new() -> Self {
        let (version, _) = watch::channel(0u64);
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            records: RwLock::new(IndexMap::new()),
            version,
            snapshot,
        }
    }

    /// Replace the entire cache with a freshly fetched collection,
    /// preserving server order. An empty collection empties the cache.
    pub fn replace_all(&self, items: Vec<(i64, T)>) {
        {
            let mut records = self.write();
            records.clear();
            for (id, item) in items {
                records.insert(id, Arc::new(item));
            }
        }
        self.publish();
    }

    /// Append a newly created record at the end of the collection.
    pub fn append(&self, id: i64, item: T) {
        self.write().insert(id, Arc::new(item));
        self.publish();
    }

    /// Replace the record with the given id in place, keeping its
    /// position. A missing id is a silent no-op; returns whether a
    /// record was replaced.
    pub fn replace(&self, id: i64, item: T) -> bool {
        let replaced = {
            let mut records = self.write();
            match records.get_mut(&id) {
                Some(slot) => {
                    *slot = Arc::new(item);
                    true
                }
                None => false,
            }
        };
        if replaced {
            self.publish();
        }
        replaced
    }

    /// Remove a record by id. Returns the removed record if it existed.
    pub fn remove(&self, id: i64) -> Option<Arc<T>> {
        // shift_remove keeps the remaining records in order.
        let removed = self.write().shift_remove(&id);
        if removed.is_some() {
            self.publish();
        }
        removed
    }

    /// Look up a record by id.
    pub fn get(&self, id: i64) -> Option<Arc<T>> {
        self.read().get(&id).map(Arc::clone)
    }

    /// Get the current snapshot (cheap `Arc` clone), in insertion order.
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// Current mutation count, usable to detect change between reads.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexMap<i64, Arc<T>>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, IndexMap<i64, Arc<T>>> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Collect all values into a snapshot vec and broadcast to subscribers.
    fn publish(&self) {
        let values: Vec<Arc<T>> = self.read().values().map(Arc::clone).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        self.version.send_modify(|v| *v += 1);
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EntityCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
