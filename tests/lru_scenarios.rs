//! Recency and eviction scenarios through the public library API.

use lru_store::cache::{LruCache, OrderedList};
use lru_store::CacheError;

fn values(list: &OrderedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_list_push_remove_and_move() {
    let mut list = OrderedList::new();

    list.push_front(10);
    let middle = list.push_back(20);
    list.push_back(30);
    assert_eq!(values(&list), vec![10, 20, 30]);

    assert_eq!(list.remove(middle), Some(20));
    assert_eq!(values(&list), vec![10, 30]);

    let tail = list.back().unwrap();
    let head = list.front().unwrap();
    list.move_to_front(tail);

    assert_eq!(values(&list), vec![30, 10]);
    assert_eq!(list.front(), Some(tail));
    assert_eq!(list.back(), Some(head));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_capacity_two_evicts_first() {
    let mut cache = LruCache::new(2).unwrap();

    assert!(!cache.set("k1", 4));
    assert!(!cache.set("k2", 5));
    assert!(!cache.set("k3", 9));

    assert_eq!(cache.get(&"k1"), None);
    assert_eq!(cache.get(&"k2"), Some(&5));
    assert_eq!(cache.get(&"k3"), Some(&9));
}

#[test]
fn test_capacity_three_evicts_least_recently_touched() {
    let mut cache = LruCache::new(3).unwrap();

    cache.set("k1", 4);
    cache.set("k2", 5);
    cache.set("k3", 9);

    assert_eq!(cache.get(&"k3"), Some(&9));
    assert!(cache.set("k2", 13));
    assert!(cache.set("k3", 2));
    assert!(!cache.set("k4", 90));

    assert_eq!(cache.get(&"k1"), None);
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_clear_then_get() {
    let mut cache = LruCache::new(4).unwrap();
    let keys = ["a", "b", "c"];
    for (i, key) in keys.iter().enumerate() {
        cache.set(key.to_string(), i);
    }

    cache.clear();

    assert_eq!(cache.len(), 0);
    for key in keys {
        assert_eq!(cache.get(key), None);
    }
}

#[test]
fn test_max_capacity_set_and_clear() {
    let mut cache = LruCache::<u64, u64>::new(usize::MAX).unwrap();

    assert!(!cache.set(7, 70));
    assert_eq!(cache.get(&7), Some(&70));
    cache.clear();

    assert_eq!(cache.get(&7), None);
    assert!(cache.is_empty());
}

#[test]
fn test_zero_capacity_is_rejected() {
    let result = LruCache::<String, String>::new(0);
    assert_eq!(result.err(), Some(CacheError::InvalidCapacity(0)));
}
