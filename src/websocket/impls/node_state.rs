use crate::websocket::enums::node_state::NodeState;

impl NodeState {
    pub fn is_ready(&self) -> bool {
        matches!(self, NodeState::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NodeState::Error)
    }

    /// A handshake is running on the socket.
    pub fn is_connecting(&self) -> bool {
        matches!(self, NodeState::Connecting | NodeState::Authenticating)
    }
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeState::Disconnected => write!(f, "DISCONNECTED"),
            NodeState::Connecting => write!(f, "CONNECTING"),
            NodeState::Authenticating => write!(f, "AUTHENTICATING"),
            NodeState::Ready => write!(f, "READY"),
            NodeState::Error => write!(f, "ERROR"),
        }
    }
}
