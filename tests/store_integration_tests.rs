//! Integration Tests for the Bounded Store
//!
//! Exercises the public API end to end: construction, insertion,
//! eviction, overwrite-refresh, and statistics.

use bounded_kv::{BoundedKvStore, StoreError};

// == Helper Functions ==

fn filled_store(capacity: usize) -> BoundedKvStore {
    let mut store = BoundedKvStore::new(capacity).unwrap();
    for i in 1..=capacity {
        store.set(format!("k{}", i), format!("v{}", i));
    }
    store
}

// == Construction Tests ==

#[test]
fn test_new_store_is_empty() {
    let store = BoundedKvStore::new(10).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.capacity(), 10);
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(BoundedKvStore::new(0).unwrap_err(), StoreError::ZeroCapacity);
}

// == Eviction Tests ==

#[test]
fn test_inserting_capacity_plus_one_keys_evicts_first() {
    let capacity = 5;
    let mut store = BoundedKvStore::new(capacity).unwrap();

    for i in 1..=capacity + 1 {
        store.set(format!("k{}", i), format!("v{}", i));
    }

    assert_eq!(store.len(), capacity);
    assert_eq!(store.get("k1"), None);
    for i in 2..=capacity + 1 {
        assert_eq!(store.get(&format!("k{}", i)), Some(format!("v{}", i)));
    }
}

#[test]
fn test_overwrite_refresh_changes_eviction_victim() {
    // A, B, C then re-insert A: order is B, C, A. D evicts B.
    let mut store = BoundedKvStore::new(3).unwrap();

    store.set("A".to_string(), "1".to_string());
    store.set("B".to_string(), "2".to_string());
    store.set("C".to_string(), "3".to_string());
    store.set("A".to_string(), "1b".to_string());
    store.set("D".to_string(), "4".to_string());

    assert_eq!(store.get("B"), None);
    assert_eq!(store.get("A"), Some("1b".to_string()));
    assert!(store.get("C").is_some());
    assert!(store.get("D").is_some());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_reads_do_not_protect_from_eviction() {
    let mut store = filled_store(3);

    // k1 is the eviction candidate; reading it must not change that
    assert!(store.get("k1").is_some());

    store.set("k4".to_string(), "v4".to_string());

    assert_eq!(store.get("k1"), None);
    assert!(store.get("k2").is_some());
}

#[test]
fn test_capacity_one_churns_single_slot() {
    let mut store = BoundedKvStore::new(1).unwrap();

    for i in 1..=4 {
        store.set(format!("k{}", i), format!("v{}", i));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&format!("k{}", i)), Some(format!("v{}", i)));
    }
    assert_eq!(store.get("k1"), None);
}

// == Lookup Tests ==

#[test]
fn test_get_absent_key_returns_none() {
    let mut store = BoundedKvStore::new(10).unwrap();
    assert_eq!(store.get("missing"), None);
}

#[test]
fn test_keys_reflect_insertion_order() {
    let mut store = filled_store(3);
    store.set("k2".to_string(), "v2b".to_string());

    let keys: Vec<&str> = store.keys().collect();
    assert_eq!(keys, vec!["k1", "k3", "k2"]);
}

// == Statistics Tests ==

#[test]
fn test_stats_track_hits_misses_and_evictions() {
    let mut store = filled_store(2);

    store.set("k3".to_string(), "v3".to_string()); // evicts k1
    assert_eq!(store.get("k1"), None); // miss
    assert!(store.get("k3").is_some()); // hit

    let stats = store.stats();
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.hit_rate(), 0.5);
}
