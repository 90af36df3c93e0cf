use crate::websocket::structs::parsed_response::ParsedResponse;
use serde_json::{json, Value};

impl ParsedResponse<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `{"attributes": {..}, "rows": [{..}, ..]}`, dropping the element
    /// back-references.
    pub fn to_json(&self) -> Value {
        json!({
            "attributes": self.attributes,
            "rows": self.rows.iter().map(|row| &row.attributes).collect::<Vec<_>>(),
        })
    }
}
