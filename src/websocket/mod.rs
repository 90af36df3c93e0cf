//! WebSocket client for an evQueue cluster.
//!
//! One persistent connection per configured node, authenticated with a
//! challenge-response handshake, carrying strictly one request at a time
//! plus unsolicited event frames.
//!
//! # Layers
//!
//! - **encoding**: pure XML codec (commands, replies, error frames, the
//!   base64 command embedded in subscribe frames)
//! - **NodeConnection**: socket, handshake and request gate for one node
//! - **ClusterClient**: node targeting (any, all, by name, by index),
//!   failover, fan-out, subscriptions and the shared topology
//!
//! # Handshake
//!
//! ```text
//!   node                          client
//!    │ ── <ready challenge=".."/> ──▶ │
//!    │ ◀── <auth response user/> ──── │   HMAC-SHA1(challenge, SHA1(password))
//!    │ ── <ready time node ../> ────▶ │   clock offset fixed here
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use evqueue_cluster::websocket::structs::api_command::ApiCommand;
//! use evqueue_cluster::websocket::structs::cluster_client::ClusterClient;
//!
//! let client = ClusterClient::new(&config.cluster)?;
//! let command = ApiCommand::builder("status", "query").attribute("type", "workflows").build()?;
//! let reply = client.api(&command).await?;
//! ```

/// Node state, node targets and reply enumerations.
pub mod enums;

/// Data structures for connections, commands and documents.
pub mod structs;

/// XML command/reply codec.
pub mod encoding;

/// The error type shared by every cluster operation.
pub mod errors;

/// Implementation blocks.
pub mod impls;

/// Seams between the cluster client and its node connections.
pub mod traits;

/// Shared type aliases.
pub mod types;

/// Handshake helpers: challenge response, server time, module lists.
#[allow(clippy::module_inception)]
pub mod websocket;
