//! Configuration management module.
//!
//! Loads, validates and writes the client configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **cluster**: ordered node URIs and the credentials shared by every node
//! - **sentry_config**: error reporting configuration
//!
//! Node order matters: index `i` of `cluster.nodes` is node `i` everywhere
//! in the client, including the failover order of "any node" calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use evqueue_cluster::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
