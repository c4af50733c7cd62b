//! LRU Store - A fixed-capacity least-recently-used cache
//!
//! The core is [`cache::LruCache`], an index over an arena-backed
//! [`cache::OrderedList`]. [`cache::SharedCache`] puts it behind a single
//! lock, and the `api` module serves it over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{LruCache, OrderedList, SharedCache};
pub use config::Config;
pub use error::CacheError;
