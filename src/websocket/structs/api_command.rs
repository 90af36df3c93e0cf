use crate::websocket::enums::node_target::NodeTarget;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A validated API call. Built through [`ApiCommandBuilder`](crate::websocket::structs::api_command_builder::ApiCommandBuilder).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiCommand {
    pub(crate) group: String,
    pub(crate) action: String,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) parameters: BTreeMap<String, String>,
    pub(crate) required_modules: Vec<String>,
    pub(crate) node: NodeTarget,
}
