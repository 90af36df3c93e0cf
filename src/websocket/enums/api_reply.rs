use crate::websocket::structs::xml_document::XmlDocument;

/// Result of `ClusterClient::api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    /// A single node answered; `index` is its position in the node list.
    Node { index: usize, document: XmlDocument },
    /// Every node answered; replies are ordered by node index.
    Cluster(Vec<XmlDocument>),
}
