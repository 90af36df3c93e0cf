//! Cluster client data structures.

/// A validated API call.
pub mod api_command;

/// Builder validating an `ApiCommand`.
pub mod api_command_builder;

/// The cluster-wide client.
pub mod cluster_client;

/// Topology owner and event sink of one client.
pub mod cluster_hub;

/// Per-node identity and state, index-aligned with the configuration.
pub mod cluster_topology;

/// An event pushed by a node.
pub mod event_frame;

/// Routes events to subscription channels.
pub mod event_router;

/// One node's WebSocket connection.
pub mod node_connection;

pub mod node_credentials;

/// Topology row handed to observers.
pub mod node_info;

/// State shared between a connection and its socket tasks.
pub mod node_shared;

pub mod node_state_change;

pub mod node_status;

/// Flattened reply: root attributes and selected rows.
pub mod parsed_response;

/// The request in flight on a connection.
pub mod pending_reply;

/// Post-authentication frame contents.
pub mod ready_frame;

pub mod response_row;

/// What to subscribe to.
pub mod subscription;

/// Live subscription returned by `subscribe`.
pub mod subscription_handle;

/// Routing triple of a subscription.
pub mod subscription_key;

/// Parsed XML frame.
pub mod xml_document;

pub mod xml_element;
