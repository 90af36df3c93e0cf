use crate::websocket::enums::node_state::NodeState;
use serde::{Deserialize, Serialize};

/// Per-node identity and state, index-aligned with the configured node list.
///
/// All vectors always have the same length. Shared between clients as
/// `SharedTopology` and written only from the node state callbacks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterTopology {
    pub descriptors: Vec<String>,
    pub names: Vec<Option<String>>,
    pub versions: Vec<Option<String>>,
    pub modules: Vec<Vec<String>>,
    pub states: Vec<NodeState>,
}
