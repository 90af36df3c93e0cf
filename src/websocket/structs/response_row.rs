use crate::websocket::structs::xml_element::XmlElement;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow<'a> {
    pub attributes: BTreeMap<String, String>,
    /// The matched element, for further targeted queries.
    pub node: &'a XmlElement,
}
