//! Sentry helpers.

/// Sentry transactions around connection creation.
pub mod sentry_tracing;
