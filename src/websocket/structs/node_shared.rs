use crate::websocket::structs::node_status::NodeStatus;
use crate::websocket::structs::pending_reply::PendingReply;
use crate::websocket::traits::node_observer::NodeObserver;
use crate::websocket::types::FrameSenderChannel;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::sync::{Notify, Semaphore};

/// Connection state shared between a `NodeConnection` and its socket tasks.
pub struct NodeShared {
    pub index: usize,
    pub descriptor: String,
    pub observer: Option<Arc<dyn NodeObserver>>,
    pub status: RwLock<NodeStatus>,
    pub pending: Mutex<Option<PendingReply>>,
    pub sender: FrameSenderChannel,
    pub request_gate: Arc<Semaphore>,
    /// Bumped on every connect and close; socket tasks of an older session
    /// must not touch the status.
    pub generation: AtomicU64,
    /// Fired by `close`; cancels a handshake in progress.
    pub closing: Notify,
}
