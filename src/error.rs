//! Error types for the bounded store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the bounded store.
///
/// Construction is the only fallible operation: `set` always succeeds and
/// `get` signals absence through `Option`, not an error, since a missing
/// key is an expected outcome rather than a failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Store capacity must be at least 1
    #[error("Capacity must be at least 1")]
    ZeroCapacity,
}

// == Result Type Alias ==
/// Convenience Result type for the bounded store.
pub type Result<T> = std::result::Result<T, StoreError>;
