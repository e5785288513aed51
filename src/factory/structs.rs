//! Factory structures.

/// Resolves drivers and assembles filesystem handles.
pub mod connection_factory;
