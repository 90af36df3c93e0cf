use crate::websocket::encoding::encoder::is_valid_name;
use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::api_command::ApiCommand;
use crate::websocket::structs::api_command_builder::ApiCommandBuilder;

impl ApiCommandBuilder {
    pub fn new(group: &str, action: &str) -> ApiCommandBuilder {
        ApiCommandBuilder {
            group: group.to_string(),
            action: action.to_string(),
            ..Default::default()
        }
    }

    pub fn attribute(mut self, key: &str, value: impl ToString) -> ApiCommandBuilder {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> ApiCommandBuilder {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }

    pub fn required_module(mut self, module: &str) -> ApiCommandBuilder {
        if !self.required_modules.iter().any(|known| known == module) {
            self.required_modules.push(module.to_string());
        }
        self
    }

    pub fn node(mut self, node: NodeTarget) -> ApiCommandBuilder {
        self.node = node;
        self
    }

    pub fn build(self) -> Result<ApiCommand, ClusterError> {
        if !is_valid_name(&self.group) {
            return Err(ClusterError::Encoding(format!("invalid command group '{}'", self.group)));
        }
        if self.action.is_empty() {
            return Err(ClusterError::Encoding(format!("command '{}' has no action", self.group)));
        }
        for key in self.attributes.keys() {
            if key == "action" || !is_valid_name(key) {
                return Err(ClusterError::Encoding(format!("invalid attribute name '{}'", key)));
            }
        }
        if self.parameters.keys().any(|name| name.is_empty()) {
            return Err(ClusterError::Encoding("parameter with an empty name".to_string()));
        }
        Ok(ApiCommand {
            group: self.group,
            action: self.action,
            attributes: self.attributes,
            parameters: self.parameters,
            required_modules: self.required_modules,
            node: self.node,
        })
    }
}
