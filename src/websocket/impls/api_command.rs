use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::structs::api_command::ApiCommand;
use crate::websocket::structs::api_command_builder::ApiCommandBuilder;
use std::collections::BTreeMap;

impl ApiCommand {
    pub fn builder(group: &str, action: &str) -> ApiCommandBuilder {
        ApiCommandBuilder::new(group, action)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn required_modules(&self) -> &[String] {
        &self.required_modules
    }

    pub fn node(&self) -> &NodeTarget {
        &self.node
    }

    /// Same command, sent to another target.
    pub fn with_node(mut self, node: NodeTarget) -> ApiCommand {
        self.node = node;
        self
    }
}
