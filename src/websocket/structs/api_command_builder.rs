use crate::websocket::enums::node_target::NodeTarget;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ApiCommandBuilder {
    pub(crate) group: String,
    pub(crate) action: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) parameters: BTreeMap<String, String>,
    pub(crate) required_modules: Vec<String>,
    pub(crate) node: NodeTarget,
}
