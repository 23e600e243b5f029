//! Cache-through query execution.

use tracing::debug;

use crate::core::{Todo, TodoStore};

use super::cache::QueryCache;
use super::filter::Filters;

/// Answer a list query, consulting the cache first.
///
/// Results are copies in insertion order, never references into the store.
/// A cached result always reflects the store as of the most recent
/// completed mutation, because mutations clear the whole cache.
pub fn run_query(store: &TodoStore, cache: &mut QueryCache, filters: &Filters) -> Vec<Todo> {
    let key = filters.key();
    if let Some(todos) = cache.get(&key) {
        debug!(
            status = %key.status,
            search = %key.search,
            results = todos.len(),
            "query served from cache"
        );
        return todos;
    }

    let todos: Vec<Todo> = store
        .iter()
        .filter(|todo| filters.matches(todo))
        .cloned()
        .collect();
    cache.put(key.clone(), todos.clone());
    debug!(
        status = %key.status,
        search = %key.search,
        results = todos.len(),
        "query computed"
    );
    todos
}
