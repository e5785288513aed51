//! Configuration management module.
//!
//! Two layers live here:
//! - **ConnectionConfig**: the loosely typed, driver-specific mapping handed to
//!   the factory for a single `make` call
//! - **Configuration**: the TOML file holding the log level, the default
//!   connection name, every named connection and the Sentry settings
//!
//! # Example
//!
//! ```toml
//! log_level = "info"
//! default = "main"
//!
//! [connections.main]
//! driver = "memory"
//!
//! [connections.main.cache]
//! driver = "illuminate"
//! connector = "array"
//! ttl = 600
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
