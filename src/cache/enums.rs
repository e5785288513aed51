//! Cache enumerations.

/// Step of the cache protocol that failed.
pub mod cache_operation;
