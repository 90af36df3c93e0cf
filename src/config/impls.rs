//! Configuration implementation blocks.

/// Default generation, TOML load/save and validation.
pub mod configuration;

/// Display and Error impls for `ConfigurationError`.
pub mod configuration_error;

/// Node list helpers on `ClusterConfig`.
pub mod cluster_config;

/// Disabled-by-default `SentryConfig`.
pub mod sentry_config;
