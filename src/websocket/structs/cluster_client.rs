use crate::websocket::structs::cluster_hub::ClusterHub;
use crate::websocket::traits::node_backend::NodeBackend;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

/// Client for a whole evQueue cluster. Node `i` is `ClusterConfig::nodes[i]`.
pub struct ClusterClient {
    pub(crate) nodes: Vec<Arc<dyn NodeBackend>>,
    pub(crate) hub: Arc<ClusterHub>,
    pub(crate) next_external_id: AtomicU64,
}
