use crate::websocket::enums::node_error_kind::NodeErrorKind;
use crate::websocket::enums::node_state::NodeState;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::node_shared::NodeShared;
use crate::websocket::structs::node_state_change::NodeStateChange;
use crate::websocket::structs::node_status::NodeStatus;
use crate::websocket::structs::ready_frame::ReadyFrame;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::traits::node_observer::NodeObserver;
use chrono::Utc;
use futures_util::{Stream, StreamExt};
use log::{debug, error, info, warn};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Notify, Semaphore};
use tokio_tungstenite::tungstenite::{self, Message};

impl NodeShared {
    pub fn new(index: usize, descriptor: &str, observer: Option<Arc<dyn NodeObserver>>) -> NodeShared {
        NodeShared {
            index,
            descriptor: descriptor.to_string(),
            observer,
            status: RwLock::new(NodeStatus::default()),
            pending: Mutex::new(None),
            sender: RwLock::new(None),
            request_gate: Arc::new(Semaphore::new(1)),
            generation: AtomicU64::new(0),
            closing: Notify::new(),
        }
    }

    pub fn state(&self) -> NodeState {
        self.status.read().state
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Applies `update` and reports the resulting status to the observer.
    pub fn update_status<F: FnOnce(&mut NodeStatus)>(&self, update: F) {
        let change = {
            let mut status = self.status.write();
            update(&mut status);
            NodeStateChange {
                descriptor: self.descriptor.clone(),
                name: status.name.clone(),
                state: status.state,
                version: status.version.clone(),
                modules: status.modules.clone(),
            }
        };
        if let Some(observer) = &self.observer {
            observer.state_changed(change);
        }
    }

    pub fn set_state(&self, state: NodeState, last_error: Option<NodeErrorKind>) {
        self.update_status(|status| {
            status.state = state;
            if last_error.is_some() {
                status.last_error = last_error;
            }
        });
    }

    pub fn set_failed(&self, error: &ClusterError) {
        self.set_state(NodeState::Error, NodeErrorKind::from_error(error));
    }

    pub fn mark_ready(&self, ready: ReadyFrame) {
        let offset = Utc::now() - ready.server_time;
        self.update_status(|status| {
            status.state = NodeState::Ready;
            status.last_error = None;
            status.clock_offset = Some(offset);
            if ready.name.is_some() {
                status.name = ready.name;
            }
            if ready.version.is_some() {
                status.version = ready.version;
            }
            if !ready.modules.is_empty() {
                status.modules = ready.modules;
            }
        });
        info!(
            "[NODE {}] Ready (clock offset {} ms)",
            self.descriptor,
            offset.num_milliseconds()
        );
    }

    /// Hands `result` to the request in flight, if any.
    pub fn resolve_pending(&self, result: Result<XmlDocument, ClusterError>) -> bool {
        let pending = self.pending.lock().take();
        match pending {
            Some(pending) => {
                let _ = pending.reply.send(result);
                true
            }
            None => false,
        }
    }

    pub fn handle_frame(&self, text: &str) {
        let document = match XmlDocument::parse(text) {
            Ok(document) => document,
            Err(e) => {
                error!("[NODE {}] Failed to decode frame: {}", self.descriptor, e);
                self.resolve_pending(Err(e));
                return;
            }
        };

        if EventFrame::is_event_document(&document) {
            debug!("[NODE {}] Event frame <{}>", self.descriptor, document.root().name);
            if let Some(observer) = &self.observer {
                observer.event_received(EventFrame::from_document(self.index, document));
            }
            return;
        }

        if !self.resolve_pending(Ok(document)) {
            warn!("[NODE {}] Received a reply with no request in flight", self.descriptor);
        }
    }

    pub async fn read_loop<S>(self: Arc<Self>, generation: u64, mut read: S)
    where
        S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    {
        let mut reason = String::from("connection closed by node");
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => self.handle_frame(text.as_str()),
                Ok(Message::Binary(data)) => match std::str::from_utf8(&data) {
                    Ok(text) => self.handle_frame(text),
                    Err(e) => warn!("[NODE {}] Dropped non UTF-8 frame: {}", self.descriptor, e),
                },
                Ok(Message::Close(frame)) => {
                    debug!("[NODE {}] Close received: {:?}", self.descriptor, frame);
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    error!("[NODE {}] WebSocket error: {}", self.descriptor, e);
                    reason = e.to_string();
                    break;
                }
            }
        }
        self.connection_lost(generation, &reason);
    }

    pub fn connection_lost(&self, generation: u64, reason: &str) {
        if !self.is_current(generation) {
            return;
        }
        self.sender.write().take();
        self.resolve_pending(Err(ClusterError::Transport(reason.to_string())));
        info!("[NODE {}] Disconnected: {}", self.descriptor, reason);
        self.set_state(NodeState::Disconnected, Some(NodeErrorKind::Transport));
    }
}
