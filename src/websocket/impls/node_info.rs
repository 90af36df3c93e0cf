use crate::websocket::structs::node_info::NodeInfo;

impl NodeInfo {
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Name when known, descriptor otherwise.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.descriptor)
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|known| known == module)
    }
}
