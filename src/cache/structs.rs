//! Cache structures.

/// Options read from a `cache` sub-configuration.
pub mod cache_options;

/// Envelope stored in the cache backend.
pub mod cache_entry;

/// Filesystem decorator routing reads through a cache backend.
pub mod cached_filesystem;

/// Filesystem view over a cache store.
pub mod cache_repository_filesystem;

/// Named cache stores with a default.
pub mod cache_service;

/// Process-local cache store.
pub mod memory_cache_repository;

/// Observer writing cache events to the log.
pub mod log_cache_observer;
