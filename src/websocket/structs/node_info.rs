use crate::websocket::enums::node_state::NodeState;
use serde::{Deserialize, Serialize};

/// One row of the cluster topology, as handed to observers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeInfo {
    pub descriptor: String,
    pub name: Option<String>,
    pub version: Option<String>,
    pub modules: Vec<String>,
    pub state: NodeState,
}
