use crate::websocket::enums::node_state::NodeState;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::xml_document::XmlDocument;
use async_trait::async_trait;

/// What the cluster client needs from one node.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeBackend: Send + Sync {
    fn descriptor(&self) -> String;

    fn state(&self) -> NodeState;

    /// Opens the socket and runs the handshake. Resolves once the node is ready.
    async fn connect(&self) -> Result<(), ClusterError>;

    /// Sends one serialized command and waits for its reply frame.
    async fn request(&self, frame: String) -> Result<XmlDocument, ClusterError>;

    async fn close(&self);
}
