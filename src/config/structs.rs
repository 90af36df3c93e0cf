//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Cluster node list and credentials.
pub mod cluster_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
