use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::subscription_handle::SubscriptionHandle;
use crate::websocket::structs::subscription_key::SubscriptionKey;
use tokio::sync::mpsc::error::TryRecvError;

impl SubscriptionHandle {
    pub fn key(&self) -> &SubscriptionKey {
        &self.key
    }

    pub fn external_id(&self) -> u64 {
        self.key.external_id
    }

    pub fn node(&self) -> &NodeTarget {
        &self.node
    }

    /// Waits for the next event. `None` once the subscription was removed.
    pub async fn next_event(&mut self) -> Option<EventFrame> {
        self.receiver.recv().await
    }

    pub fn try_next_event(&mut self) -> Option<EventFrame> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
