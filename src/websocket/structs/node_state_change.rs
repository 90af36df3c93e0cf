use crate::websocket::enums::node_state::NodeState;

/// Reported by a node connection whenever its state or identity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStateChange {
    pub descriptor: String,
    pub name: Option<String>,
    pub state: NodeState,
    pub version: Option<String>,
    pub modules: Vec<String>,
}
