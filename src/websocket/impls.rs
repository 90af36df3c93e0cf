//! Cluster client implementation blocks.

pub mod api_command;

pub mod api_command_builder;

pub mod api_reply;

/// Construction, targeting, failover and fan-out.
pub mod cluster_client;

/// Subscribe, unsubscribe and unsubscribe-all.
pub mod cluster_subscriptions;

/// Topology updates and event routing for node callbacks.
pub mod cluster_hub;

pub mod cluster_topology;

pub mod event_frame;

pub mod event_router;

/// Handshake, request gate, socket tasks and close.
pub mod node_connection;

pub mod node_credentials;

pub mod node_error_kind;

pub mod node_info;

/// Frame handling and state transitions shared with the socket tasks.
pub mod node_shared;

pub mod node_state;

pub mod node_target;

pub mod parsed_response;

pub mod ready_frame;

pub mod subscription;

pub mod subscription_handle;

pub mod xml_document;

pub mod xml_element;
