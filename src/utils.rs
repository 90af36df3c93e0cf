//! Small cross-cutting helpers.

/// Sentry performance transactions around cluster calls.
pub mod sentry_tracing;
