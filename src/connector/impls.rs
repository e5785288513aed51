//! Implementation blocks for connectors.

pub mod builtin_driver;

pub mod connector_registry;

pub mod adapter_pool;

pub mod null_connector;

pub mod memory_connector;

pub mod adapter_connector;

pub mod illuminate_connector;
