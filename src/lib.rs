#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod service;
pub mod telemetry;

pub use error::{Effect, Error, Transience};
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    CoreError, InvalidId, Limits, Patch, StoreStats, Timestamp, Todo, TodoId, TodoPatch, TodoStore,
};
pub use crate::query::{CacheCounters, Filters, QueryCache, QueryKey, StatusFilter, run_query};
pub use crate::service::{ListResult, TodoService};
