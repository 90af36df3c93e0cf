//! # evqueue-cluster
//!
//! Asynchronous WebSocket client for a cluster of evQueue engines.
//!
//! ## Overview
//!
//! Each configured node gets one persistent WebSocket, authenticated with the
//! engine's challenge-response handshake. API calls go to a named node, to
//! any reachable node (with failover in configuration order) or to every
//! node at once. Event subscriptions are multiplexed over the same sockets
//! and delivered to per-subscription channels.
//!
//! ## Features
//!
//! - **Handshake**: HMAC-SHA1 challenge response, clock offset from the ready frame
//! - **Request gate**: one request in flight per connection, later calls queue
//! - **Failover**: transport failures move "any node" calls to the next node
//! - **Fan-out**: all-or-nothing calls to every node, replies in node order
//! - **Subscriptions**: routing by event type, external id and object id
//! - **Topology**: shared per-node name, version, modules and state, with observers
//! - **Monitoring**: atomic health counters and optional Sentry tracing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use evqueue_cluster::config::structs::configuration::Configuration;
//! use evqueue_cluster::websocket::structs::api_command::ApiCommand;
//! use evqueue_cluster::websocket::structs::cluster_client::ClusterClient;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let client = ClusterClient::new(&config.cluster)?;
//! let reply = client.api(&ApiCommand::builder("status", "query").build()?).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`stats`] - Connection health statistics
//! - [`structs`] - CLI argument parsing
//! - [`utils`] - Sentry tracing helpers
//! - [`websocket`] - The cluster client itself

/// Common utilities and shared functionality.
///
/// Contains logging setup and command-line value parsing.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Statistics tracking module.
///
/// Counts requests, replies, failovers, connects and routed events per client.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Sentry tracing helpers.
pub mod utils;

/// WebSocket cluster client.
///
/// Node connections, the cluster client, the XML codec and subscriptions.
pub mod websocket;
