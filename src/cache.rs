//! Query Cache
//!
//! Keyed store of server responses. Entries are never written directly:
//! fetch results land through `begin_fetch` / `fulfill` / `fail`, and the only
//! other mutations are `invalidate` (mark stale so the next read refetches)
//! and `optimistic_patch` (in-place edit, reconciled by a later invalidate).

use std::collections::HashMap;
use std::hash::Hash;

use leptos::prelude::*;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never requested
    Missing,
    Fetching,
    Fresh,
    /// Invalidated; the value (if any) is still readable until the refetch lands
    Stale,
    /// Last fetch failed; not retried until invalidated
    Failed,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: Option<V>,
    status: QueryStatus,
    /// Why the last fetch failed, cleared when a new one starts
    error: Option<ApiError>,
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Entry<V>>,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Eq + Hash + Clone, V> QueryCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).and_then(|e| e.value.as_ref())
    }

    pub fn status(&self, key: &K) -> QueryStatus {
        self.entries.get(key).map_or(QueryStatus::Missing, |e| e.status)
    }

    pub fn error(&self, key: &K) -> Option<&ApiError> {
        self.entries.get(key).and_then(|e| e.error.as_ref())
    }

    pub fn needs_fetch(&self, key: &K) -> bool {
        matches!(self.status(key), QueryStatus::Missing | QueryStatus::Stale)
    }

    /// Mark the key as in flight. Returns false if no fetch is needed.
    pub fn begin_fetch(&mut self, key: K) -> bool {
        if !self.needs_fetch(&key) {
            return false;
        }
        self.entries
            .entry(key)
            .and_modify(|e| {
                e.status = QueryStatus::Fetching;
                e.error = None;
            })
            .or_insert(Entry { value: None, status: QueryStatus::Fetching, error: None });
        true
    }

    /// Store a fetch result. If the key was invalidated while the request was
    /// in flight the entry stays stale, so the newer state still gets fetched.
    pub fn fulfill(&mut self, key: K, value: V) {
        let entry = self.entries.entry(key).or_insert(Entry { value: None, status: QueryStatus::Fetching, error: None });
        entry.value = Some(value);
        entry.error = None;
        if entry.status != QueryStatus::Stale {
            entry.status = QueryStatus::Fresh;
        }
    }

    /// Record a failed fetch; any previous value is kept
    pub fn fail(&mut self, key: &K, error: ApiError) {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.status == QueryStatus::Fetching {
                entry.status = QueryStatus::Failed;
                entry.error = Some(error);
            }
        }
    }

    /// Mark stale so the next read refetches. Returns false for unknown keys.
    pub fn invalidate(&mut self, key: &K) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.status = QueryStatus::Stale;
                true
            }
            None => false,
        }
    }

    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.status = QueryStatus::Stale;
        }
    }

    /// Apply `updater` to the cached value in place, without touching the
    /// entry status. Returns `None` when there is no value to patch.
    pub fn optimistic_patch<R>(&mut self, key: &K, updater: impl FnOnce(&mut V) -> R) -> Option<R> {
        self.entries
            .get_mut(key)
            .and_then(|e| e.value.as_mut())
            .map(updater)
    }

    pub fn remove(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Drop every entry whose key fails `keep`
    pub fn retain_keys(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.entries.retain(|k, _| keep(k));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Shared access to a cache living behind some interior-mutability wrapper
pub trait CacheHandle<K, V> {
    /// Run `f` against the cache. `None` if the cache is gone.
    fn write<R>(&self, f: impl FnOnce(&mut QueryCache<K, V>) -> R) -> Option<R>;
}

impl<K, V> CacheHandle<K, V> for std::cell::RefCell<QueryCache<K, V>> {
    fn write<R>(&self, f: impl FnOnce(&mut QueryCache<K, V>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<K, V> CacheHandle<K, V> for RwSignal<QueryCache<K, V>>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    fn write<R>(&self, f: impl FnOnce(&mut QueryCache<K, V>) -> R) -> Option<R> {
        self.try_update(f)
    }
}
