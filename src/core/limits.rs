//! Validation and cache bounds (normative defaults).

use serde::{Deserialize, Serialize};

/// Bounds enforced at the adapter boundary, plus the query cache capacity.
///
/// Values are intentionally explicit about their units to avoid confusion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_title_chars: usize,
    pub max_description_chars: usize,
    pub max_search_chars: usize,

    pub query_cache_entries: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_description_chars: 1_000,
            max_search_chars: 200,

            query_cache_entries: 50,
        }
    }
}
