//! Cache Entry Module
//!
//! Defines the payload stored in each node of the recency list.

// == Cache Entry ==
/// A key/value pair as held by the recency list.
///
/// The key is kept alongside the value so that evicting the tail node
/// tells the cache which index entry to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// Key under which the entry is indexed
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    // == Replace Value ==
    /// Swaps in a new value, returning the previous one.
    pub fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
