use crate::websocket::enums::api_reply::ApiReply;
use crate::websocket::structs::parsed_response::ParsedResponse;
use crate::websocket::structs::xml_document::XmlDocument;

impl ApiReply {
    pub fn node_index(&self) -> Option<usize> {
        match self {
            ApiReply::Node { index, .. } => Some(*index),
            ApiReply::Cluster(_) => None,
        }
    }

    pub fn document(&self) -> Option<&XmlDocument> {
        match self {
            ApiReply::Node { document, .. } => Some(document),
            ApiReply::Cluster(_) => None,
        }
    }

    pub fn documents(&self) -> Vec<&XmlDocument> {
        match self {
            ApiReply::Node { document, .. } => vec![document],
            ApiReply::Cluster(documents) => documents.iter().collect(),
        }
    }

    pub fn into_documents(self) -> Vec<XmlDocument> {
        match self {
            ApiReply::Node { document, .. } => vec![document],
            ApiReply::Cluster(documents) => documents,
        }
    }

    /// Default-selector parse of every reply, in node order.
    pub fn responses(&self) -> Vec<ParsedResponse<'_>> {
        self.documents().into_iter().map(XmlDocument::response).collect()
    }
}
