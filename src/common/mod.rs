//! Shared utility functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use evqueue_cluster::common::common::{parse_key_value, setup_logging};
//!
//! setup_logging(&config)?;
//! let (key, value) = parse_key_value("limit=30")?;
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Unit tests for the shared helpers.
pub mod tests;
