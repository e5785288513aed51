//! Connectors and the registry that maps driver names to them.
//!
//! A connector turns a [`ConnectionConfig`](crate::config::structs::connection_config::ConnectionConfig)
//! into a ready filesystem handle. Connectors are registered by name in a
//! [`ConnectorRegistry`](structs::connector_registry::ConnectorRegistry) and
//! constructed fresh for every `make` call.
//!
//! # Built-in Drivers
//!
//! - **null**: ignores its configuration, returns a filesystem that stores nothing
//! - **memory**: returns a fresh process-local filesystem
//! - **adapter**: hands out an already configured filesystem looked up by the `adapter` key
//! - **illuminate**: exposes a named store of an external cache service as a filesystem
//!
//! Host applications may register their own connectors, or replace the
//! built-ins, under any name.

/// Built-in driver enumeration.
pub mod enums;

/// Error types for connectors and the registry.
pub mod errors;

/// Implementation blocks for connectors.
pub mod impls;

/// Connector data structures.
pub mod structs;

/// Connector and adapter lookup traits.
pub mod traits;

/// Shared type aliases.
pub mod types;
