//! Store Module
//!
//! Main store engine combining HashMap storage with insertion-order
//! eviction tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::{InsertionOrder, StoreStats};

// == Bounded KV Store ==
/// Fixed-capacity key-value store with insertion-order eviction.
///
/// Holds at most `capacity` entries. When an insert of a new key would
/// exceed capacity, the oldest-inserted entry is evicted. Overwriting an
/// existing key resets its eviction priority; reads never do.
///
/// The store carries no internal locking. Concurrent use requires the
/// caller to hold external mutual exclusion around each call.
#[derive(Debug)]
pub struct BoundedKvStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Insertion-order tracker
    order: InsertionOrder,
    /// Usage statistics
    stats: StoreStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl BoundedKvStore {
    // == Constructor ==
    /// Creates a new BoundedKvStore with the specified capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the store can hold
    ///
    /// # Errors
    /// Returns [`StoreError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StoreError::ZeroCapacity);
        }

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: StoreStats::new(),
            capacity,
        })
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten and the key's
    /// eviction priority resets to "most recently inserted". If the key is
    /// new and the store is at capacity, the oldest-inserted entry is
    /// evicted first. Always succeeds; at most one entry is evicted per
    /// call.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn set(&mut self, key: String, value: String) {
        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the oldest entry
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!(key = %evicted_key, "evicted oldest entry");
            }
        }

        self.entries.insert(key.clone(), value);

        // Record insertion (moves an overwritten key to most recent)
        self.order.record(&key);

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the value for a key, or None if absent.
    ///
    /// A read does not count as a re-insertion: eviction order is
    /// unaffected. Only the hit/miss counters are updated.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Keys ==
    /// Iterates over the currently-held keys, oldest insertion first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.keys().map(String::as_str)
    }

    // == Stats ==
    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    /// Returns the fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
