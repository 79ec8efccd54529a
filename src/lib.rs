//! Bounded KV - a fixed-capacity in-memory key-value store
//!
//! Provides a string-keyed store that evicts the oldest-inserted entry
//! once capacity is exceeded. Overwrites reset a key's eviction priority;
//! reads never do.

pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{Result, StoreError};
pub use store::{BoundedKvStore, StoreStats};
