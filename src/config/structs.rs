//! Configuration data structures.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Driver-specific mapping handed to the factory.
pub mod connection_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
