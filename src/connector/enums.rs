//! Connector enumerations.

/// Names of the drivers registered by `ConnectorRegistry::with_defaults`.
pub mod builtin_driver;
