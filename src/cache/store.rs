//! Cache Store Module
//!
//! Fixed-capacity LRU cache: a HashMap index from key to list node,
//! layered over an [`OrderedList`] kept in recency order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, NodeHandle, OrderedList};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Count-bounded cache that evicts the least recently used entry.
///
/// The list front is the most recently touched entry and the back is the
/// next eviction candidate. Not synchronized; see
/// [`SharedCache`](crate::cache::SharedCache) for a locked variant.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Entries in recency order
    list: OrderedList<CacheEntry<K, V>>,
    /// Key to node lookup
    index: HashMap<K, NodeHandle>,
    /// Maximum number of entries allowed
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is rejected with [`CacheError::InvalidCapacity`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            list: OrderedList::new(),
            index: HashMap::new(),
            capacity,
            stats: CacheStats::new(capacity),
        })
    }

    // == Set ==
    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// Returns true if the key was already present, in which case its
    /// value is overwritten in place. Inserting a new key into a full
    /// cache evicts the least recently used entry.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(handle) {
                entry.replace_value(value);
            }
            self.list.move_to_front(handle);
            return true;
        }

        let handle = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, handle);

        if self.list.len() > self.capacity {
            self.evict_oldest();
        }

        self.stats.set_total_entries(self.list.len());
        false
    }

    // == Get ==
    /// Returns the value for `key`, marking it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&handle) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.list.move_to_front(handle);
        self.list.get(handle).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Returns the value for `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.list.get(handle).map(|entry| &entry.value)
    }

    // == Contains ==
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Drops every entry.
    ///
    /// The list is replaced by a fresh instance, so any handle from before
    /// the clear no longer resolves.
    pub fn clear(&mut self) {
        let dropped = self.list.len();
        self.list = OrderedList::new();
        self.index = HashMap::new();
        self.stats.set_total_entries(0);
        debug!(dropped, "Cache cleared");
    }

    // == Keys ==
    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.list.len());
        stats
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) {
        let Some(back) = self.list.back() else {
            return;
        };
        if let Some(evicted) = self.list.remove(back) {
            self.index.remove(&evicted.key);
            self.stats.record_eviction();
            debug!(len = self.list.len(), "Evicted least recently used entry");
        }
    }
}
