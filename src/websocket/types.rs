use crate::websocket::errors::ClusterError;
use crate::websocket::structs::cluster_topology::ClusterTopology;
use crate::websocket::structs::node_info::NodeInfo;
use crate::websocket::structs::xml_document::XmlDocument;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;

pub type ReplySender = oneshot::Sender<Result<XmlDocument, ClusterError>>;
pub type FrameSenderChannel = parking_lot::RwLock<Option<mpsc::UnboundedSender<Message>>>;
pub type SharedTopology = Arc<parking_lot::RwLock<ClusterTopology>>;
pub type StateObserver = Arc<dyn Fn(usize, &NodeInfo) + Send + Sync>;
