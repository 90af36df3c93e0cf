use crate::websocket::structs::response_row::ResponseRow;
use std::collections::BTreeMap;

/// Flattened view of a response document.
///
/// `attributes` holds the root element's own attributes, `rows` one entry per
/// element matched by the selector given to
/// [`XmlDocument::parse_response`](crate::websocket::structs::xml_document::XmlDocument::parse_response).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse<'a> {
    pub attributes: BTreeMap<String, String>,
    pub rows: Vec<ResponseRow<'a>>,
}
