//! Connector structures.

/// Driver name to connector constructor mapping.
pub mod connector_registry;

/// Named pool of already configured filesystems.
pub mod adapter_pool;

/// Connector for the `null` driver.
pub mod null_connector;

/// Connector for the `memory` driver.
pub mod memory_connector;

/// Connector for the `adapter` driver.
pub mod adapter_connector;

/// Connector for the `illuminate` driver.
pub mod illuminate_connector;
