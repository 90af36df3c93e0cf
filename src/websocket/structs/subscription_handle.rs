use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::subscription_key::SubscriptionKey;
use tokio::sync::mpsc;

/// Returned by `ClusterClient::subscribe`; keep it to receive events and to
/// unsubscribe the same triple later.
#[derive(Debug)]
pub struct SubscriptionHandle {
    pub(crate) route_id: u64,
    pub(crate) key: SubscriptionKey,
    /// Where the subscribe call landed; unsubscribe goes to the same place.
    pub(crate) node: NodeTarget,
    pub(crate) receiver: mpsc::UnboundedReceiver<EventFrame>,
}
