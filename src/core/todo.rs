//! The todo record.
//!
//! Identity and creation time are set by the store and never change after
//! that; title, description, and completed are mutated in place.

use serde::{Deserialize, Serialize};

use super::identity::TodoId;
use super::time::Timestamp;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Todo {
    /// New records start incomplete.
    pub(crate) fn new(
        id: TodoId,
        title: String,
        description: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at,
        }
    }
}
