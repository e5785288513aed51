//! Implementation blocks for configuration types.

pub mod configuration;

pub mod configuration_error;

pub mod connection_config;

pub mod config_value;

pub mod sentry_config;
