//! Manager structures.

/// Lazily opened, reusable named connections.
pub mod connection_manager;
