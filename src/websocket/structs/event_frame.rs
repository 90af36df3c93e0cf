use crate::websocket::structs::xml_document::XmlDocument;

/// An unsolicited frame pushed by a node for one of its subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFrame {
    pub node_index: usize,
    pub event_type: Option<String>,
    pub external_id: Option<u64>,
    pub object_id: Option<u64>,
    pub document: XmlDocument,
}
