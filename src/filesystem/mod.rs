//! Storage handle capability and the bundled process-local filesystems.
//!
//! Every connector hands back an `Arc<dyn Filesystem>`. The factory never
//! looks inside it; the cache decorator wraps one filesystem with another.
//!
//! # Bundled Implementations
//!
//! - **NullFilesystem**: discards writes, every read misses
//! - **MemoryFilesystem**: map-backed store living as long as its handle

/// Path helpers shared by the implementations.
#[allow(clippy::module_inception)]
pub mod filesystem;

/// Error types for filesystem operations.
pub mod errors;

/// Implementation blocks for the bundled filesystems.
pub mod impls;

/// Filesystem data structures.
pub mod structs;

/// Filesystem trait definition.
pub mod traits;
