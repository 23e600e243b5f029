//! Read queries: filters, the bounded result cache, and cache-through
//! execution.

pub mod cache;
pub mod engine;
pub mod filter;

pub use cache::{CacheCounters, QueryCache};
pub use engine::run_query;
pub use filter::{Filters, QueryKey, StatusFilter};
