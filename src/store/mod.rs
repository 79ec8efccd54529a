//! Store Module
//!
//! Provides a fixed-capacity in-memory key-value store with
//! insertion-order eviction.

mod order;
mod stats;
mod store;


// Re-export public types
pub use order::InsertionOrder;
pub use stats::StoreStats;
pub use store::BoundedKvStore;
