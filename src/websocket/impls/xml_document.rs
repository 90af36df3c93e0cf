use crate::websocket::encoding::encoder;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::parsed_response::ParsedResponse;
use crate::websocket::structs::response_row::ResponseRow;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::structs::xml_element::XmlElement;

pub const DEFAULT_RESPONSE_SELECTOR: &str = "/response/*";

impl XmlDocument {
    pub fn new(root: XmlElement) -> XmlDocument {
        XmlDocument { root }
    }

    pub fn parse(input: &str) -> Result<XmlDocument, ClusterError> {
        encoder::parse_document(input)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn to_xml(&self) -> Result<String, ClusterError> {
        encoder::write_document(self)
    }

    /// Elements matched by a path selector.
    ///
    /// Supported forms: `/response/*` (absolute path, first segment is the
    /// root element), `//workflow` (any descendant, root included) and
    /// `workflow/task` (path relative to the root element). `*` matches any
    /// element name in a segment.
    pub fn select(&self, selector: &str) -> Vec<&XmlElement> {
        if let Some(name) = selector.strip_prefix("//") {
            let mut found = Vec::new();
            self.root.collect_descendants(name, &mut found);
            return found;
        }

        let (mut current, segments): (Vec<&XmlElement>, Vec<&str>) = match selector.strip_prefix('/') {
            Some(absolute) => {
                let mut segments = absolute.split('/').filter(|segment| !segment.is_empty());
                match segments.next() {
                    None => return vec![&self.root],
                    Some(first) if first == "*" || first == self.root.name => {
                        (vec![&self.root], segments.collect())
                    }
                    Some(_) => return Vec::new(),
                }
            }
            None => (
                vec![&self.root],
                selector.split('/').filter(|segment| !segment.is_empty()).collect(),
            ),
        };

        for segment in segments {
            current = current
                .into_iter()
                .flat_map(|element| element.children_named(segment))
                .collect();
        }
        current
    }

    pub fn parse_response(&self, selector: &str) -> ParsedResponse<'_> {
        ParsedResponse {
            attributes: self.root.attribute_map(),
            rows: self
                .select(selector)
                .into_iter()
                .map(|node| ResponseRow {
                    attributes: node.attribute_map(),
                    node,
                })
                .collect(),
        }
    }

    /// `parse_response` with the `/response/*` selector.
    pub fn response(&self) -> ParsedResponse<'_> {
        self.parse_response(DEFAULT_RESPONSE_SELECTOR)
    }
}

impl std::str::FromStr for XmlDocument {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XmlDocument::parse(s)
    }
}
