use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::parsed_response::ParsedResponse;
use crate::websocket::structs::xml_document::XmlDocument;

impl EventFrame {
    /// Event frames are recognised by the correlation tag echoed from the
    /// subscribe call.
    pub fn is_event_document(document: &XmlDocument) -> bool {
        document.root().has_attribute("external_id")
    }

    pub fn from_document(node_index: usize, document: XmlDocument) -> EventFrame {
        let (event_type, external_id, object_id) = {
            let root = document.root();
            let numeric = |key: &str| root.attribute(key).and_then(|value| value.trim().parse::<u64>().ok());
            (root.attribute("event").map(str::to_string), numeric("external_id"), numeric("object_id"))
        };
        EventFrame {
            node_index,
            event_type,
            external_id,
            object_id,
            document,
        }
    }

    pub fn response(&self) -> ParsedResponse<'_> {
        self.document.response()
    }
}
