//! Named connection management.
//!
//! The manager owns the configured connections and asks the factory for a
//! filesystem the first time each one is requested. Opened handles are reused
//! until `disconnect` or `reconnect` drops them.

/// Error types for connection lookup.
pub mod errors;

/// Implementation blocks for the manager.
pub mod impls;

/// Manager structures.
pub mod structs;
