//! Cache decoration for storage handles.
//!
//! A connection configured with a `cache` section is served through a
//! [`CachedFilesystem`](structs::cached_filesystem::CachedFilesystem): reads
//! are answered from the cache backend when possible, writes go to the primary
//! filesystem and then invalidate the touched entries.
//!
//! # Failure Policy
//!
//! The cache is an optimisation. Any error raised by the cache backend is
//! reported to the configured [`CacheObserver`](traits::cache_observer::CacheObserver)
//! and the primary result is used. Errors from the primary filesystem are
//! always returned to the caller.
//!
//! # Concurrent Writes
//!
//! Every successful mutation bumps a counter shared by the decorator and its
//! clones. A read only stores what it fetched from the primary when no
//! mutation completed while it was fetching, so an overlapping write cannot
//! leave the older contents cached. The guard is checked before the cache
//! write is issued: a mutation whose invalidation lands between that check
//! and the cache write can still be shadowed until the entry's `ttl` runs out
//! or the path is written again. Configure a `ttl` where that matters.
//!
//! # External Cache Services
//!
//! The `illuminate` driver builds its cache backend from a named store looked
//! up through a [`CacheServiceLocator`](traits::cache_service_locator::CacheServiceLocator).
//! `CacheService` is the bundled locator; `MemoryCacheRepository` is the
//! bundled process-local store.

/// Cache operation enumeration used when reporting failures.
pub mod enums;

/// Error types for cache store operations.
pub mod errors;

/// Implementation blocks for cache structures.
pub mod impls;

/// Cache data structures.
pub mod structs;

/// Cache store, locator and observer traits.
pub mod traits;
