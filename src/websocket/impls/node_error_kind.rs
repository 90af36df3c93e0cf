use crate::websocket::enums::node_error_kind::NodeErrorKind;
use crate::websocket::errors::ClusterError;

impl NodeErrorKind {
    pub fn from_error(error: &ClusterError) -> Option<NodeErrorKind> {
        match error {
            ClusterError::Transport(_) | ClusterError::NotReady(_) => Some(NodeErrorKind::Transport),
            ClusterError::Authentication(_) => Some(NodeErrorKind::Authentication),
            ClusterError::Decoding(_) | ClusterError::Encoding(_) => Some(NodeErrorKind::Decoding),
            _ => None,
        }
    }
}
