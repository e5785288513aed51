//! Common utilities shared by the binary and the library.
//!
//! - Log level parsing
//! - Logging setup (`fern` with coloured levels)

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
