//! Status and text filters for list queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CoreError, Todo};

/// Completion-status filter.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    /// Check whether a record's completion state passes this filter.
    pub fn matches(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !completed,
            StatusFilter::Completed => completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(CoreError::ValidationFailed {
                field: "status".into(),
                reason: format!("unknown status filter `{s}`"),
            }),
        }
    }
}

/// Filtering criteria for list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filters {
    /// Filter by completion status.
    #[serde(default)]
    pub status: StatusFilter,

    /// Text search in title/description (case-insensitive substring match).
    #[serde(default)]
    pub search: String,
}

impl Filters {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Check if a record matches these filters.
    pub fn matches(&self, todo: &Todo) -> bool {
        if !self.status.matches(todo.completed) {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let title_match = todo.title.to_lowercase().contains(&needle);
            let desc_match = todo.description.to_lowercase().contains(&needle);
            if !title_match && !desc_match {
                return false;
            }
        }

        true
    }

    /// Normalized cache key for this filter set.
    ///
    /// Matching is case-insensitive, so two searches differing only in case
    /// identify the same result set.
    pub fn key(&self) -> QueryKey {
        QueryKey {
            status: self.status,
            search: self.search.to_lowercase(),
        }
    }
}

/// Normalized `(status, search)` pair identifying a distinct result set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryKey {
    pub status: StatusFilter,
    pub search: String,
}
