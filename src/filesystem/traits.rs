//! Filesystem capability traits.

/// The storage handle every connector produces.
pub mod filesystem;
