//! Connector trait definitions.

/// Turns a connection configuration into a filesystem handle.
pub mod connector;

/// Lookup of already configured filesystems by name.
pub mod adapter_locator;
