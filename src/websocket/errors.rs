use crate::websocket::enums::node_state::NodeState;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Application error {code}: {message}")]
    Application {
        code: String,
        message: String,
    },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No nodes available")]
    NoNodesAvailable,

    #[error("Node not ready (state: {0})")]
    NotReady(NodeState),

    #[error("Node {node} does not provide module {module}")]
    ModuleUnavailable {
        node: String,
        module: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ClusterError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClusterError::Transport(_) | ClusterError::NotReady(_))
    }

    /// Only transport-class failures move an "any node" call on to the next node.
    pub fn is_retryable(&self) -> bool {
        self.is_transport()
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ClusterError::Authentication(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error_display() {
        let error = ClusterError::Authentication("invalid credentials".to_string());
        assert_eq!(format!("{}", error), "Authentication error: invalid credentials");
    }

    #[test]
    fn test_transport_error_display() {
        let error = ClusterError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_application_error_display() {
        let error = ClusterError::Application {
            code: "UNKNOWN_WORKFLOW".to_string(),
            message: "Unknown workflow".to_string(),
        };
        assert_eq!(format!("{}", error), "Application error UNKNOWN_WORKFLOW: Unknown workflow");
    }

    #[test]
    fn test_not_ready_display() {
        let error = ClusterError::NotReady(NodeState::Connecting);
        assert_eq!(format!("{}", error), "Node not ready (state: CONNECTING)");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ClusterError::Transport("closed".to_string()).is_retryable());
        assert!(ClusterError::NotReady(NodeState::Disconnected).is_retryable());
        assert!(!ClusterError::Authentication("bad".to_string()).is_retryable());
        assert!(!ClusterError::Decoding("bad".to_string()).is_retryable());
        assert!(!ClusterError::Encoding("bad".to_string()).is_retryable());
        assert!(!ClusterError::NoNodesAvailable.is_retryable());
        assert!(!ClusterError::Application {
            code: "E".to_string(),
            message: "m".to_string(),
        }.is_retryable());
    }

    #[test]
    fn test_error_debug() {
        let error = ClusterError::UnknownNode("node-9".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownNode"));
        assert!(debug_str.contains("node-9"));
    }
}
