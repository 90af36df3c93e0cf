//! Cluster client traits.

/// One node as seen by the cluster client.
pub mod node_backend;

/// Callbacks from a node connection.
pub mod node_observer;
