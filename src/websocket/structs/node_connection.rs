use crate::websocket::structs::node_credentials::NodeCredentials;
use crate::websocket::structs::node_shared::NodeShared;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct SessionTasks {
    pub writer: JoinHandle<()>,
    pub reader: JoinHandle<()>,
}

/// One persistent WebSocket to one cluster node.
pub struct NodeConnection {
    pub(crate) shared: Arc<NodeShared>,
    pub(crate) credentials: NodeCredentials,
    pub(crate) connect_lock: tokio::sync::Mutex<()>,
    pub(crate) tasks: parking_lot::Mutex<Option<SessionTasks>>,
}
