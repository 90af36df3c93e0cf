use crate::websocket::structs::xml_element::XmlElement;
use serde::{Deserialize, Serialize};

/// A parsed frame: exactly one root element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub root: XmlElement,
}
