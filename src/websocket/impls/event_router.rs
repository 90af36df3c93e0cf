use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::event_router::{EventRoute, EventRouter};
use crate::websocket::structs::subscription_key::SubscriptionKey;
use log::debug;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;

impl EventRoute {
    pub fn matches(&self, event: &EventFrame) -> bool {
        if event.external_id != Some(self.key.external_id) {
            return false;
        }
        if let Some(node) = self.node {
            if event.node_index != node {
                return false;
            }
        }
        if let Some(object_id) = self.key.object_id {
            if event.object_id != Some(object_id) {
                return false;
            }
        }
        match &event.event_type {
            Some(event_type) => *event_type == self.key.event_type,
            None => true,
        }
    }
}

impl EventRouter {
    pub fn new() -> EventRouter {
        EventRouter::default()
    }

    /// Adds a route for `key` on `node` (`None` for every node) and returns
    /// its id with the receiving end.
    pub fn register(
        &self,
        key: SubscriptionKey,
        node: Option<usize>,
        allocated: bool,
    ) -> (u64, mpsc::UnboundedReceiver<EventFrame>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.next_route_id.fetch_add(1, Ordering::SeqCst);
        self.routes
            .write()
            .entry(key.external_id)
            .or_default()
            .push(EventRoute {
                id,
                key,
                node,
                allocated,
                sender,
            });
        (id, receiver)
    }

    /// Pins route `id` to the node its subscribe call landed on.
    pub fn bind(&self, id: u64, node: Option<usize>) {
        let mut routes = self.routes.write();
        if let Some(route) = routes.values_mut().flatten().find(|route| route.id == id) {
            route.node = node;
        }
    }

    pub fn remove(&self, id: u64) -> bool {
        let mut routes = self.routes.write();
        let mut removed = false;
        routes.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|route| route.id != id);
            removed |= bucket.len() != before;
            !bucket.is_empty()
        });
        removed
    }

    pub fn clear(&self) {
        self.routes.write().clear();
    }

    pub fn len(&self) -> usize {
        self.routes.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_external_id(&self, external_id: u64) -> bool {
        self.routes.read().contains_key(&external_id)
    }

    /// Whether a live route uses `external_id` as a client-allocated id.
    pub fn is_allocated(&self, external_id: u64) -> bool {
        self.routes
            .read()
            .get(&external_id)
            .is_some_and(|bucket| bucket.iter().any(|route| route.allocated))
    }

    /// Delivers the event to every matching route and returns how many
    /// subscribers received it. Routes whose receiver is gone are dropped.
    pub fn dispatch(&self, event: &EventFrame) -> usize {
        let Some(external_id) = event.external_id else {
            return 0;
        };

        let mut delivered = 0;
        let mut stale = false;
        {
            let routes = self.routes.read();
            if let Some(bucket) = routes.get(&external_id) {
                for route in bucket.iter().filter(|route| route.matches(event)) {
                    if route.sender.send(event.clone()).is_ok() {
                        delivered += 1;
                    } else {
                        stale = true;
                    }
                }
            }
        }

        if stale {
            let mut routes = self.routes.write();
            if let Some(bucket) = routes.get_mut(&external_id) {
                bucket.retain(|route| !route.sender.is_closed());
                if bucket.is_empty() {
                    routes.remove(&external_id);
                }
            }
            debug!("[EVENTS] Dropped closed subscriptions for external id {}", external_id);
        }
        delivered
    }
}
