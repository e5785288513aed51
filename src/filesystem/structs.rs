//! Filesystem structures.

/// Metadata describing a single stored file.
pub mod file_metadata;

/// Filesystem that stores nothing.
pub mod null_filesystem;

/// Process-local filesystem backed by a map.
pub mod memory_filesystem;
