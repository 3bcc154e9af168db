//! # Lookup Cache
//!
//! Memoizes member and family lookups in front of a [`FamilyStore`].
//!
//! Each key owns a `tokio::sync::OnceCell`; concurrent callers for the same
//! key await one fetch. A failed fetch leaves the cell empty, so the next
//! caller retries, and the store's error is returned as-is.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::model::*;
use crate::storage::FamilyStore;
use crate::{Error, Result};

/// Hit/miss counters. A miss is a store fetch actually performed; every
/// other successful lookup, including one that waited on a fetch in
/// flight, is a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

type Cells<K, V> = Mutex<HashMap<K, Arc<OnceCell<V>>>>;

pub struct LookupCache<S: FamilyStore> {
    store: Arc<S>,
    members: Cells<MemberId, Option<Member>>,
    families: Cells<FamilyId, Arc<FamilySnapshot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: FamilyStore> LookupCache<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            members: Mutex::new(HashMap::new()),
            families: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Member by id; `None` when the store has no such member.
    pub async fn member(&self, id: MemberId) -> Result<Option<Member>> {
        let cell = cell(&self.members, id);
        self.fetch(&cell, move || async move {
            debug!(member = %id, "cache miss: member");
            self.store.member(id).await
        })
        .await
        .cloned()
    }

    /// Snapshot of one family. Fails with [`Error::UnknownFamily`] when the
    /// store does not know the family.
    pub async fn family(&self, id: FamilyId) -> Result<Arc<FamilySnapshot>> {
        let cell = cell(&self.families, id);
        self.fetch(&cell, move || async move {
            debug!(family = %id, "cache miss: family");
            self.store
                .snapshot(id)
                .await?
                .map(Arc::new)
                .ok_or(Error::UnknownFamily(id))
        })
        .await
        .cloned()
    }

    /// Drop every cached entry. Fetches already in flight complete into
    /// cells that are no longer reachable.
    pub fn clear(&self) {
        self.members.lock().clear();
        self.families.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    async fn fetch<'c, V, F, Fut>(&self, cell: &'c OnceCell<V>, init: F) -> Result<&'c V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(v) = cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(v);
        }
        let mut fetched = false;
        let value = cell
            .get_or_try_init(|| {
                fetched = true;
                self.misses.fetch_add(1, Ordering::Relaxed);
                init()
            })
            .await?;
        // Waited on another caller's fetch.
        if !fetched {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        Ok(value)
    }
}

/// The cell for `key`, created empty on first use. The map lock is held
/// only for the lookup, never across a fetch.
fn cell<K: Eq + Hash, V>(cells: &Cells<K, V>, key: K) -> Arc<OnceCell<V>> {
    Arc::clone(cells.lock().entry(key).or_insert_with(|| Arc::new(OnceCell::new())))
}

// ============================================================================
// Tests
// ============================================================================
