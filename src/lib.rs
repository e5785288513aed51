//! # storage-connect
//!
//! A pluggable connection factory for filesystem-like storage handles.
//!
//! ## Overview
//!
//! A connection is described by a loosely typed configuration mapping. Its
//! `driver` key selects a connector from a registry, the connector builds the
//! storage handle, and an optional `cache` section wraps that handle in a
//! caching decorator backed by a second connector.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storage_connect::cache::structs::cache_service::CacheService;
//! use storage_connect::config::structs::connection_config::ConnectionConfig;
//! use storage_connect::connector::structs::adapter_pool::AdapterPool;
//! use storage_connect::connector::structs::connector_registry::ConnectorRegistry;
//! use storage_connect::factory::structs::connection_factory::ConnectionFactory;
//!
//! let registry = ConnectorRegistry::with_defaults(
//!     Arc::new(AdapterPool::new()),
//!     Arc::new(CacheService::with_array_store()),
//! );
//! let factory = ConnectionFactory::new(Arc::new(registry));
//! let config = ConnectionConfig::new()
//!     .with("driver", "memory")
//!     .with("cache", ConnectionConfig::new().with("driver", "illuminate"));
//! let filesystem = factory.make(&config).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Cache decorator, external cache service seam, observers
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Connection configuration values and the TOML configuration file
//! - [`connector`] - Connector trait, built-in connectors and the registry
//! - [`factory`] - Driver resolution and handle assembly
//! - [`filesystem`] - The storage handle capability and bundled filesystems
//! - [`manager`] - Named, lazily opened connections

/// Cache decoration module.
///
/// Wraps a primary filesystem with a cache backend; cache failures never
/// reach the caller.
pub mod cache;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles the per-connection configuration mapping as well as loading,
/// saving and validating the TOML configuration file.
pub mod config;

/// Connector module.
///
/// Defines the connector capability, the built-in connectors and the
/// name-to-constructor registry.
pub mod connector;

/// Connection factory module.
///
/// Resolves the driver of a configuration and assembles the final handle.
pub mod factory;

/// Filesystem capability module.
pub mod filesystem;

/// Connection manager module.
pub mod manager;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;
