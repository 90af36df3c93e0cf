use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::subscription_key::SubscriptionKey;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use tokio::sync::mpsc;

pub struct EventRoute {
    /// Unique per router; two subscriptions of the same triple keep
    /// separate routes.
    pub id: u64,
    pub key: SubscriptionKey,
    /// Connection the subscription lives on, `None` for every node.
    pub node: Option<usize>,
    /// The external id was handed out by the client, not chosen by the caller.
    pub allocated: bool,
    pub sender: mpsc::UnboundedSender<EventFrame>,
}

/// Routing table from correlation tag to subscriber channels.
#[derive(Default)]
pub struct EventRouter {
    pub(crate) routes: RwLock<HashMap<u64, Vec<EventRoute>>>,
    pub(crate) next_route_id: AtomicU64,
}
