//! Cache Module
//!
//! Fixed-capacity LRU cache built on an arena-backed ordered list.

mod entry;
mod list;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use list::{Iter, NodeHandle, OrderedList};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
