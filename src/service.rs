//! The operation surface the HTTP adapter binds to.
//!
//! `TodoService` owns the record store and the query cache behind a single
//! mutex: compound operations (find-then-mutate, check-cache-then-populate)
//! must not interleave once the surrounding adapter runs handlers in
//! parallel. Reads copy on return, so no reference into the store escapes
//! the lock.
//!
//! Every mutation that affected at least one record clears the whole cache;
//! a miss (unknown id, empty bulk set) leaves it untouched.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CoreError, Limits, StoreStats, Todo, TodoId, TodoPatch, TodoStore};
use crate::query::{CacheCounters, Filters, QueryCache, StatusFilter, run_query};

/// A list query answer, optionally bundled with counts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub todos: Vec<Todo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StoreStats>,
}

struct Inner {
    store: TodoStore,
    cache: QueryCache,
}

/// Cloneable handle over the store and cache.
///
/// Construction belongs to the adapter's composition root; every handler
/// gets a clone of the same handle.
#[derive(Clone)]
pub struct TodoService {
    inner: Arc<Mutex<Inner>>,
}

impl TodoService {
    pub fn new(limits: &Limits) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                store: TodoStore::new(),
                cache: QueryCache::new(limits.query_cache_entries),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("todo service lock poisoned")
    }

    /// List records matching the filters, in insertion order.
    pub fn list(&self, status: StatusFilter, search: &str, include_stats: bool) -> ListResult {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let filters = Filters::new(status, search);
        let todos = run_query(&inner.store, &mut inner.cache, &filters);
        let stats = include_stats.then(|| inner.store.stats());
        ListResult { todos, stats }
    }

    pub fn create(&self, title: &str, description: &str) -> Result<Todo, CoreError> {
        let mut inner = self.lock();
        let todo = inner.store.create(title, description)?;
        inner.cache.clear();
        debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    pub fn get(&self, id: TodoId) -> Option<Todo> {
        self.lock().store.get(id).cloned()
    }

    pub fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, CoreError> {
        let mut inner = self.lock();
        let updated = inner.store.update(id, patch)?;
        if let Some(todo) = &updated {
            inner.cache.clear();
            debug!(id = %todo.id, "todo updated");
        }
        Ok(updated)
    }

    pub fn toggle(&self, id: TodoId) -> Option<Todo> {
        let mut inner = self.lock();
        let toggled = inner.store.toggle(id);
        if let Some(todo) = &toggled {
            inner.cache.clear();
            debug!(id = %todo.id, completed = todo.completed, "todo toggled");
        }
        toggled
    }

    pub fn delete(&self, id: TodoId) -> Option<Todo> {
        let mut inner = self.lock();
        let removed = inner.store.remove(id);
        if let Some(todo) = &removed {
            inner.cache.clear();
            debug!(id = %todo.id, "todo deleted");
        }
        removed
    }

    /// Toggle every record in the id set; unknown ids are silently skipped.
    /// The cache is cleared only when at least one record was affected.
    pub fn bulk_toggle(&self, ids: &[TodoId]) -> Vec<Todo> {
        let mut inner = self.lock();
        let affected = inner.store.bulk_toggle(ids);
        if !affected.is_empty() {
            inner.cache.clear();
            debug!(count = affected.len(), "todos toggled in bulk");
        }
        affected
    }

    /// Remove every record in the id set; unknown ids are silently skipped.
    /// The cache is cleared only when at least one record was removed.
    pub fn bulk_delete(&self, ids: &[TodoId]) -> Vec<Todo> {
        let mut inner = self.lock();
        let removed = inner.store.bulk_remove(ids);
        if !removed.is_empty() {
            inner.cache.clear();
            debug!(count = removed.len(), "todos deleted in bulk");
        }
        removed
    }

    pub fn stats(&self) -> StoreStats {
        self.lock().store.stats()
    }

    /// Empty the store, reset the id counter, and drop all cached results.
    pub fn clear_all(&self) -> usize {
        let mut inner = self.lock();
        let removed = inner.store.clear_all();
        inner.cache.clear();
        debug!(removed, "store cleared");
        removed
    }

    /// Cache instrumentation snapshot.
    pub fn cache_counters(&self) -> CacheCounters {
        self.lock().cache.counters()
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}
