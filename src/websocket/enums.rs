//! Cluster client enumerations.

/// Result of an API call: one node's reply or every node's replies.
pub mod api_reply;

/// Kind of the last failure seen on a connection.
pub mod node_error_kind;

/// Connection state machine.
pub mod node_state;

/// Which node(s) an API call goes to.
pub mod node_target;
