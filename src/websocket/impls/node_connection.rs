use crate::websocket::encoding::encoder::{build_auth_frame, check_reply};
use crate::websocket::enums::node_error_kind::NodeErrorKind;
use crate::websocket::enums::node_state::NodeState;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::node_connection::{NodeConnection, SessionTasks};
use crate::websocket::structs::node_credentials::NodeCredentials;
use crate::websocket::structs::node_shared::NodeShared;
use crate::websocket::structs::node_status::NodeStatus;
use crate::websocket::structs::pending_reply::PendingReply;
use crate::websocket::structs::ready_frame::ReadyFrame;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::traits::node_backend::NodeBackend;
use crate::websocket::traits::node_observer::NodeObserver;
use crate::websocket::websocket::challenge_response;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsWrite = SplitSink<WsStream, Message>;
type WsRead = SplitStream<WsStream>;

impl NodeConnection {
    pub fn new(
        index: usize,
        descriptor: &str,
        credentials: NodeCredentials,
        observer: Option<Arc<dyn NodeObserver>>,
    ) -> NodeConnection {
        NodeConnection {
            shared: Arc::new(NodeShared::new(index, descriptor, observer)),
            credentials,
            connect_lock: tokio::sync::Mutex::new(()),
            tasks: parking_lot::Mutex::new(None),
        }
    }

    pub fn index(&self) -> usize {
        self.shared.index
    }

    pub fn status(&self) -> NodeStatus {
        self.shared.status.read().clone()
    }

    pub fn last_error(&self) -> Option<NodeErrorKind> {
        self.shared.status.read().last_error
    }

    /// Local time minus server time, measured when the node became ready.
    pub fn clock_offset(&self) -> Option<TimeDelta> {
        self.shared.status.read().clock_offset
    }

    /// The node's wall clock, derived from the local clock and the offset.
    pub fn server_now(&self) -> Option<DateTime<Utc>> {
        self.clock_offset().map(|offset| Utc::now() - offset)
    }

    async fn handshake(&self, generation: u64) -> Result<(WsWrite, WsRead, ReadyFrame), ClusterError> {
        let descriptor = &self.shared.descriptor;
        info!("[NODE {}] Connecting", descriptor);
        let (stream, _) = connect_async(descriptor.as_str())
            .await
            .map_err(|e| ClusterError::Transport(e.to_string()))?;
        let (mut write, mut read) = stream.split();

        let greeting = next_document(&mut read).await?;
        if let Err(ClusterError::Application { code, message }) = check_reply(&greeting) {
            return Err(ClusterError::Authentication(format!("{} ({})", message, code)));
        }
        let challenge = greeting
            .root()
            .attribute("challenge")
            .ok_or_else(|| ClusterError::Decoding(format!("expected a challenge, got <{}>", greeting.root().name)))?;
        let response = challenge_response(challenge, &self.credentials.password)?;
        let auth = build_auth_frame(&response, &self.credentials.user)?;
        write
            .send(Message::Text(auth.into()))
            .await
            .map_err(|e| ClusterError::Transport(e.to_string()))?;
        if self.shared.is_current(generation) {
            self.shared.set_state(NodeState::Authenticating, None);
        }
        debug!("[NODE {}] Challenge answered as {}", descriptor, self.credentials.user);

        let ready = ReadyFrame::from_document(&next_document(&mut read).await?)?;
        Ok((write, read, ready))
    }

    fn start_session(&self, generation: u64, mut write: WsWrite, read: WsRead, ready: ReadyFrame) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
        *self.shared.sender.write() = Some(tx);

        let descriptor = self.shared.descriptor.clone();
        let writer = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                let closing = matches!(message, Message::Close(_));
                if let Err(e) = write.send(message).await {
                    warn!("[NODE {}] Failed to send frame: {}", descriptor, e);
                    break;
                }
                if closing {
                    break;
                }
            }
            let _ = write.close().await;
        });
        let reader = tokio::spawn(self.shared.clone().read_loop(generation, read));

        if let Some(previous) = self.tasks.lock().replace(SessionTasks { writer, reader }) {
            previous.reader.abort();
            previous.writer.abort();
        }
        self.shared.mark_ready(ready);
    }

    fn stop_tasks(&self) {
        if let Some(tasks) = self.tasks.lock().take() {
            tasks.reader.abort();
            // The writer drains the queued close frame once the sender is gone.
            drop(tasks.writer);
        }
    }
}

async fn next_document(read: &mut WsRead) -> Result<XmlDocument, ClusterError> {
    loop {
        match read.next().await {
            Some(Ok(Message::Text(text))) => return XmlDocument::parse(text.as_str()),
            Some(Ok(Message::Binary(data))) => {
                let text = std::str::from_utf8(&data).map_err(|e| ClusterError::Decoding(e.to_string()))?;
                return XmlDocument::parse(text);
            }
            Some(Ok(Message::Close(_))) | None => {
                return Err(ClusterError::Transport("connection closed during handshake".to_string()));
            }
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(ClusterError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl NodeBackend for NodeConnection {
    fn descriptor(&self) -> String {
        self.shared.descriptor.clone()
    }

    fn state(&self) -> NodeState {
        self.shared.state()
    }

    async fn connect(&self) -> Result<(), ClusterError> {
        let _guard = self.connect_lock.lock().await;
        if self.shared.state() == NodeState::Ready {
            return Ok(());
        }
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.set_state(NodeState::Connecting, None);

        // Registered before the generation check so a `close` racing with
        // this call is never missed.
        let closing = self.shared.closing.notified();
        tokio::pin!(closing);
        closing.as_mut().enable();
        let handshake = if self.shared.is_current(generation) {
            tokio::select! {
                result = self.handshake(generation) => result,
                _ = &mut closing => Err(ClusterError::Transport("connection closed while connecting".to_string())),
            }
        } else {
            Err(ClusterError::Transport("connection closed while connecting".to_string()))
        };

        match handshake {
            Ok((write, read, ready)) => {
                if !self.shared.is_current(generation) {
                    if self.shared.state().is_connecting() {
                        self.shared.set_state(NodeState::Disconnected, None);
                    }
                    return Err(ClusterError::Transport("connection closed while connecting".to_string()));
                }
                self.start_session(generation, write, read, ready);
                Ok(())
            }
            Err(e) => {
                error!("[NODE {}] Connect failed: {}", self.shared.descriptor, e);
                if self.shared.is_current(generation) {
                    self.shared.set_failed(&e);
                } else if self.shared.state().is_connecting() {
                    // A close landed before this attempt reported CONNECTING.
                    self.shared.set_state(NodeState::Disconnected, None);
                }
                Err(e)
            }
        }
    }

    async fn request(&self, frame: String) -> Result<XmlDocument, ClusterError> {
        let state = self.shared.state();
        if state != NodeState::Ready {
            return Err(ClusterError::NotReady(state));
        }

        let permit = self
            .shared
            .request_gate
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ClusterError::Transport(e.to_string()))?;

        // The node may have dropped while this call was queued.
        let state = self.shared.state();
        if state != NodeState::Ready {
            return Err(ClusterError::NotReady(state));
        }

        let (tx, rx) = oneshot::channel();
        *self.shared.pending.lock() = Some(PendingReply { reply: tx, permit });

        let sent = match self.shared.sender.read().as_ref() {
            Some(sender) => sender.send(Message::Text(frame.into())).is_ok(),
            None => false,
        };
        if !sent {
            self.shared.pending.lock().take();
            return Err(ClusterError::Transport("connection is closed".to_string()));
        }
        // The reader may have gone away between the state check and the send.
        if !self.shared.state().is_ready() {
            self.shared
                .resolve_pending(Err(ClusterError::Transport("connection lost".to_string())));
        }

        rx.await
            .unwrap_or_else(|_| Err(ClusterError::Transport("connection dropped the request".to_string())))
    }

    async fn close(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        self.shared.closing.notify_waiters();
        if let Some(sender) = self.shared.sender.write().take() {
            let _ = sender.send(Message::Close(None));
        }
        self.shared
            .resolve_pending(Err(ClusterError::Transport("connection closed".to_string())));
        self.stop_tasks();
        if self.shared.state() != NodeState::Disconnected {
            info!("[NODE {}] Closed", self.shared.descriptor);
            self.shared.set_state(NodeState::Disconnected, None);
        }
    }
}

impl Drop for NodeConnection {
    fn drop(&mut self) {
        if let Some(tasks) = self.tasks.lock().take() {
            tasks.reader.abort();
            tasks.writer.abort();
        }
    }
}
