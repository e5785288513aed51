//! Connection factory.
//!
//! `ConnectionFactory::make` validates the `driver` key, resolves the
//! connector through the registry, connects, and wraps the result in a
//! `CachedFilesystem` when the configuration carries a `cache` section.
//! Every driver key involved is checked before any connector runs, so a
//! failed `make` has no connector side effects beyond those of the connector
//! that failed.

/// Error types for `make`.
pub mod errors;

/// Implementation blocks for the factory.
pub mod impls;

/// Factory structures.
pub mod structs;

#[cfg(test)]
mod tests;
