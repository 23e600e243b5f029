//! Core domain types.
//!
//! Module hierarchy follows type dependency order:
//! - time: wall-clock primitive
//! - identity: TodoId
//! - error: CoreError refusal states
//! - limits: normative bounds
//! - todo: the record
//! - patch: Patch, TodoPatch
//! - store: TodoStore

pub mod error;
pub mod identity;
pub mod limits;
pub mod patch;
pub mod store;
pub mod time;
pub mod todo;

pub use error::{CoreError, InvalidId};
pub use identity::TodoId;
pub use limits::Limits;
pub use patch::{Patch, TodoPatch};
pub use store::{StoreStats, TodoStore};
pub use time::Timestamp;
pub use todo::Todo;
