//! Cache trait definitions.

/// Key/value store exposed by an external cache service.
pub mod cache_repository;

/// Lookup of cache stores by name.
pub mod cache_service_locator;

/// Hook notified about cache hits, misses and swallowed failures.
pub mod cache_observer;
