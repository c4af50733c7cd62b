//! Shared Cache Module
//!
//! Thread-safe handle around an [`LruCache`]. A single exclusive lock
//! guards the whole set/get/clear surface, since every lookup also
//! rewires the recency list.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, LruCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, lock-guarded LRU cache. Clones share the same entries.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a shared cache with the given capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_cache(LruCache::new(capacity)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    // == Set ==
    /// See [`LruCache::set`].
    pub async fn set(&self, key: K, value: V) -> bool {
        self.inner.lock().await.set(key, value)
    }

    // == Get ==
    /// See [`LruCache::get`]. Returns a clone since the lock is released
    /// before the caller sees the value.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    // == Clear ==
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.lock().await.capacity()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }
}
