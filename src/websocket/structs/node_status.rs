use crate::websocket::enums::node_error_kind::NodeErrorKind;
use crate::websocket::enums::node_state::NodeState;
use chrono::TimeDelta;

/// Mutable per-connection status, guarded by the connection's lock.
#[derive(Debug, Clone, Default)]
pub struct NodeStatus {
    pub state: NodeState,
    pub last_error: Option<NodeErrorKind>,
    /// Local time minus server time, fixed when the node became ready.
    pub clock_offset: Option<TimeDelta>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub modules: Vec<String>,
}
