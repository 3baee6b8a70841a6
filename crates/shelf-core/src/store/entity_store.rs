// ── Cached CRUD store for one entity ──
//
// Wraps the API client with an `EntityCache` and keeps the cache
// consistent with the last-known server state after every operation,
// per the configured `SyncPolicy`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use shelf_api::{ApiClient, Resource};

use super::cache::EntityCache;
use crate::error::CoreError;

/// How the cache is brought back in sync after a successful mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Apply the mutation's own response to the cache (append / replace /
    /// filter). Cheaper: no extra round trip.
    #[default]
    LocalMerge,
    /// Re-fetch the whole collection after every mutation. Stronger:
    /// the cache reflects exactly what the server holds, including
    /// changes made by other writers.
    Refetch,
}

/// Cached CRUD operations for one entity type.
///
/// The cache is populated by the first `fetch_all` and mutated only
/// through this store's own operations. All operations return typed
/// results; the envelope's `message` travels inside [`CoreError`] on
/// failure.
pub struct EntityStore<T: Resource> {
    client: Arc<ApiClient>,
    cache: EntityCache<T>,
    policy: SyncPolicy,

    /// Ticket counter for in-flight fetches. A fetch response is applied
    /// only while its ticket is still the latest, so a slow response can
    /// never clobber the result of a fetch that started after it.
    fetch_generation: AtomicU64,
}

impl<T: Resource> EntityStore<T> {
    pub fn new(client: Arc<ApiClient>, policy: SyncPolicy) -> Self {
        Self {
            client,
            cache: EntityCache::new(),
            policy,
            fetch_generation: AtomicU64::new(0),
        }
    }

    // ── Read paths ───────────────────────────────────────────────────

    /// Fetch the full collection and replace the cache unconditionally,
    /// even with an empty result. Safe to call repeatedly.
    pub async fn fetch_all(&self) -> Result<Arc<Vec<Arc<T>>>, CoreError> {
        let ticket = self.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let records = self.client.list_all::<T>().await?;

        if self.fetch_generation.load(Ordering::SeqCst) == ticket {
            self.cache
                .replace_all(records.into_iter().map(|r| (r.id(), r)).collect());
        } else {
            debug!(resource = T::PATH, "dropping stale fetch response");
        }

        Ok(self.cache.snapshot())
    }

    /// Cached record if present — no request is issued. Otherwise falls
    /// back to a single GET, returning `None` on any failure. The
    /// fallback result is not inserted into the cache.
    pub async fn find_by_id(&self, id: i64) -> Option<Arc<T>> {
        if let Some(record) = self.cache.get(id) {
            return Some(record);
        }

        match self.client.get_by_id::<T>(id).await {
            Ok(record) => Some(Arc::new(record)),
            Err(err) => {
                debug!(resource = T::PATH, id, %err, "lookup fallback failed");
                None
            }
        }
    }

    // ── Write paths ──────────────────────────────────────────────────

    /// Create a record. On success the returned record (with its assigned
    /// id) is appended to the cache; on failure the cache is untouched.
    pub async fn add(&self, payload: &T::Create) -> Result<T, CoreError> {
        let created = self.client.create::<T>(payload).await?;
        match self.policy {
            SyncPolicy::LocalMerge => self.cache.append(created.id(), created.clone()),
            SyncPolicy::Refetch => self.refetch_after_mutation().await,
        }
        Ok(created)
    }

    /// Update a record. On success the cached record with that id is
    /// replaced by the server's response; if the id is absent from the
    /// cache the merge is a silent no-op.
    pub async fn edit(&self, id: i64, patch: &T::Patch) -> Result<T, CoreError> {
        let updated = self.client.update_by_id::<T>(id, patch).await?;
        match self.policy {
            SyncPolicy::LocalMerge => {
                self.cache.replace(id, updated.clone());
            }
            SyncPolicy::Refetch => self.refetch_after_mutation().await,
        }
        Ok(updated)
    }

    /// Delete a record. On success the record is filtered out of the
    /// cache unconditionally, trusting the caller's id. Returns the
    /// confirmation message from the envelope.
    pub async fn remove(&self, id: i64) -> Result<String, CoreError> {
        let envelope = self.client.delete_by_id::<T>(id).await?;
        match self.policy {
            SyncPolicy::LocalMerge => {
                self.cache.remove(id);
            }
            SyncPolicy::Refetch => self.refetch_after_mutation().await,
        }
        Ok(envelope.message)
    }

    // ── Cache accessors ──────────────────────────────────────────────

    /// Current cache contents, in server order.
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.cache.snapshot()
    }

    /// Subscribe to cache changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.cache.subscribe()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Post-mutation refresh under `SyncPolicy::Refetch`. The mutation
    /// itself already succeeded, so a failed refresh only logs: the cache
    /// keeps its previous state until the next successful fetch.
    async fn refetch_after_mutation(&self) {
        if let Err(err) = self.fetch_all().await {
            warn!(resource = T::PATH, %err, "post-mutation refetch failed");
        }
    }
}
