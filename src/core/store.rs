//! The record store: ordered todo collection plus id issuance.
//!
//! Holds the authoritative list of records in insertion order and the
//! monotonically increasing id counter. Ids are never reused, even after
//! deletion or a full clear of the collection mid-process.
//!
//! The store validates title non-emptiness itself; length bounds are an
//! adapter concern (see `api`). It knows nothing about the query cache -
//! invalidation is orchestrated one level up, in `service`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::CoreError;
use super::identity::TodoId;
use super::patch::{Patch, TodoPatch};
use super::time::Timestamp;
use super::todo::Todo;

/// Counts over the current collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// In-memory todo store.
///
/// Iteration order is insertion order; deletion removes an element without
/// reordering the remainder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a record, appending it to the end of the collection.
    ///
    /// Both fields are trimmed. Fails if the trimmed title is empty - the
    /// store guards this invariant independently of the adapter.
    pub fn create(&mut self, title: &str, description: &str) -> Result<Todo, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::ValidationFailed {
                field: "title".into(),
                reason: "must not be empty".into(),
            });
        }
        let id = TodoId::issue(self.next_id);
        self.next_id += 1;
        let todo = Todo::new(
            id,
            title.to_string(),
            description.trim().to_string(),
            Timestamp::now(),
        );
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Linear lookup by id.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    /// Apply a partial update in place, preserving `id` and `created_at`.
    ///
    /// The patch is validated before the lookup, so a bad patch never
    /// half-applies: a title `Set` is trimmed and re-checked non-empty, and
    /// clearing title or completed is refused (required fields). Clearing
    /// description resets it to the empty string. `Ok(None)` when no record
    /// matches.
    pub fn update(&mut self, id: TodoId, patch: TodoPatch) -> Result<Option<Todo>, CoreError> {
        let title = match patch.title {
            Patch::Keep => None,
            Patch::Clear => {
                return Err(CoreError::ValidationFailed {
                    field: "title".into(),
                    reason: "cannot clear required field".into(),
                });
            }
            Patch::Set(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(CoreError::ValidationFailed {
                        field: "title".into(),
                        reason: "must not be empty".into(),
                    });
                }
                Some(trimmed)
            }
        };
        let description = match patch.description {
            Patch::Keep => None,
            Patch::Clear => Some(String::new()),
            Patch::Set(raw) => Some(raw.trim().to_string()),
        };
        let completed = match patch.completed {
            Patch::Keep => None,
            Patch::Clear => {
                return Err(CoreError::ValidationFailed {
                    field: "completed".into(),
                    reason: "cannot clear required field".into(),
                });
            }
            Patch::Set(value) => Some(value),
        };

        let Some(todo) = self.get_mut(id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(description) = description {
            todo.description = description;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        Ok(Some(todo.clone()))
    }

    /// Flip `completed`.
    pub fn toggle(&mut self, id: TodoId) -> Option<Todo> {
        let todo = self.get_mut(id)?;
        todo.completed = !todo.completed;
        Some(todo.clone())
    }

    /// Remove a record, preserving the order of the remainder.
    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Toggle every record whose id is in the set; unknown ids are silently
    /// skipped. Affected records are returned in store order.
    pub fn bulk_toggle(&mut self, ids: &[TodoId]) -> Vec<Todo> {
        let wanted: BTreeSet<TodoId> = ids.iter().copied().collect();
        let mut affected = Vec::new();
        for todo in &mut self.todos {
            if wanted.contains(&todo.id) {
                todo.completed = !todo.completed;
                affected.push(todo.clone());
            }
        }
        affected
    }

    /// Remove every record whose id is in the set, preserving the relative
    /// order of survivors; unknown ids are silently skipped.
    pub fn bulk_remove(&mut self, ids: &[TodoId]) -> Vec<Todo> {
        let wanted: BTreeSet<TodoId> = ids.iter().copied().collect();
        let mut removed = Vec::new();
        self.todos.retain(|todo| {
            if wanted.contains(&todo.id) {
                removed.push(todo.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Counts in a single pass; `active = total - completed`.
    pub fn stats(&self) -> StoreStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        StoreStats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// Empty the collection and reset the id counter to 1.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.todos.len();
        self.todos.clear();
        self.next_id = 1;
        removed
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for title in titles {
            store.create(title, "").expect("valid title");
        }
        store
    }

    fn set<T>(value: T) -> Patch<T> {
        Patch::Set(value)
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = TodoStore::new();
        let a = store.create("first", "").expect("create");
        let b = store.create("second", "").expect("create");
        let c = store.create("third", "").expect("create");
        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);
        assert_eq!(c.id.value(), 3);
        assert!(!a.completed);
    }

    #[test]
    fn create_trims_fields() {
        let mut store = TodoStore::new();
        let todo = store.create("  Buy milk  ", "  two liters  ").expect("create");
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "two liters");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = TodoStore::new();
        let err = store.create("   ", "").expect_err("blank title");
        assert!(matches!(err, CoreError::ValidationFailed { field, .. } if field == "title"));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store_with(&["a", "b"]);
        store.remove(TodoId::issue(2)).expect("present");
        let c = store.create("c", "").expect("create");
        assert_eq!(c.id.value(), 3);
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let mut store = store_with(&["original"]);
        let id = TodoId::issue(1);
        let updated = store
            .update(
                id,
                TodoPatch {
                    description: set("details".to_string()),
                    ..TodoPatch::default()
                },
            )
            .expect("valid patch")
            .expect("present");
        assert_eq!(updated.title, "original");
        assert_eq!(updated.description, "details");
        assert!(!updated.completed);
    }

    #[test]
    fn update_revalidates_title() {
        let mut store = store_with(&["original"]);
        let id = TodoId::issue(1);
        let err = store
            .update(
                id,
                TodoPatch {
                    title: set("   ".to_string()),
                    ..TodoPatch::default()
                },
            )
            .expect_err("blank title");
        assert!(matches!(err, CoreError::ValidationFailed { field, .. } if field == "title"));
        assert_eq!(store.get(id).expect("present").title, "original");
    }

    #[test]
    fn update_refuses_clearing_required_fields() {
        let mut store = store_with(&["original"]);
        let id = TodoId::issue(1);
        assert!(
            store
                .update(
                    id,
                    TodoPatch {
                        title: Patch::Clear,
                        ..TodoPatch::default()
                    },
                )
                .is_err()
        );
        assert!(
            store
                .update(
                    id,
                    TodoPatch {
                        completed: Patch::Clear,
                        ..TodoPatch::default()
                    },
                )
                .is_err()
        );
    }

    #[test]
    fn update_clear_resets_description() {
        let mut store = TodoStore::new();
        store.create("title", "details").expect("create");
        let id = TodoId::issue(1);
        let updated = store
            .update(
                id,
                TodoPatch {
                    description: Patch::Clear,
                    ..TodoPatch::default()
                },
            )
            .expect("valid patch")
            .expect("present");
        assert_eq!(updated.description, "");
    }

    #[test]
    fn update_missing_id_is_a_sentinel() {
        let mut store = store_with(&["a"]);
        let result = store
            .update(
                TodoId::issue(99),
                TodoPatch {
                    completed: set(true),
                    ..TodoPatch::default()
                },
            )
            .expect("valid patch");
        assert!(result.is_none());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = store_with(&["a"]);
        let id = TodoId::issue(1);
        assert!(store.toggle(id).expect("present").completed);
        assert!(!store.toggle(id).expect("present").completed);
        assert!(store.toggle(TodoId::issue(9)).is_none());
    }

    #[test]
    fn remove_preserves_order_of_remainder() {
        let mut store = store_with(&["a", "b", "c"]);
        let removed = store.remove(TodoId::issue(2)).expect("present");
        assert_eq!(removed.title, "b");
        let titles: Vec<_> = store.iter().map(|todo| todo.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn bulk_toggle_skips_unknown_ids() {
        let mut store = store_with(&["a", "b", "c"]);
        let affected = store.bulk_toggle(&[TodoId::issue(1), TodoId::issue(9), TodoId::issue(3)]);
        let ids: Vec<_> = affected.iter().map(|todo| todo.id.value()).collect();
        assert_eq!(ids, [1, 3]);
        assert!(affected.iter().all(|todo| todo.completed));
        assert!(!store.get(TodoId::issue(2)).expect("present").completed);
    }

    #[test]
    fn bulk_remove_preserves_survivor_order() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let removed = store.bulk_remove(&[TodoId::issue(4), TodoId::issue(1), TodoId::issue(9)]);
        let removed_ids: Vec<_> = removed.iter().map(|todo| todo.id.value()).collect();
        assert_eq!(removed_ids, [1, 4]);
        let titles: Vec<_> = store.iter().map(|todo| todo.title.as_str()).collect();
        assert_eq!(titles, ["b", "c"]);
    }

    #[test]
    fn bulk_ops_with_no_matches_affect_nothing() {
        let mut store = store_with(&["a"]);
        assert!(store.bulk_toggle(&[TodoId::issue(9)]).is_empty());
        assert!(store.bulk_remove(&[TodoId::issue(9)]).is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stats_counts_in_one_pass() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle(TodoId::issue(2)).expect("present");
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 1);
    }

    #[test]
    fn clear_all_resets_the_counter() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.clear_all(), 2);
        assert!(store.is_empty());
        let fresh = store.create("again", "").expect("create");
        assert_eq!(fresh.id.value(), 1);
    }
}
