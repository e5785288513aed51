//! Configuration enumerations.

/// Errors raised while loading, saving or validating configuration files.
pub mod configuration_error;

/// Values stored in a connection configuration.
pub mod config_value;
