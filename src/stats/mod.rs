//! Connection health statistics for a cluster client.
//!
//! Every `ClusterClient` owns one set of atomic counters, updated from the
//! request path, the per-node state callbacks and the event router. Readers
//! take a `Stats` snapshot, which serializes to JSON for the CLI.
//!
//! # Example
//!
//! ```rust,ignore
//! use evqueue_cluster::stats::enums::stats_event::StatsEvent;
//!
//! client.update_stats(StatsEvent::RequestsSent, 1);
//! let stats = client.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
