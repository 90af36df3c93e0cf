use crate::stats::enums::stats_event::StatsEvent;
use crate::websocket::encoding::encoder::{build_command, subscribe_command, unsubscribe_all_command, unsubscribe_command};
use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::cluster_client::ClusterClient;
use crate::websocket::structs::subscription::Subscription;
use crate::websocket::structs::subscription_handle::SubscriptionHandle;
use crate::websocket::structs::subscription_key::SubscriptionKey;
use futures_util::future::join_all;
use log::info;

impl ClusterClient {
    /// Subscribes to an event type. The route is in place before the
    /// subscribe call goes out, so events pushed right away (`send_now`)
    /// are not lost. Events are only delivered from the node the
    /// subscription was made on.
    pub async fn subscribe(&self, subscription: Subscription) -> Result<SubscriptionHandle, ClusterError> {
        let (external_id, allocated) = match subscription.external_id {
            Some(external_id) if self.hub.router.is_allocated(external_id) => {
                return Err(ClusterError::Encoding(format!(
                    "external id {} is already allocated by this client",
                    external_id
                )));
            }
            Some(external_id) => (external_id, false),
            None => (self.allocate_external_id(), true),
        };
        let command = subscribe_command(&subscription, external_id)?;
        let key = SubscriptionKey {
            event_type: subscription.event_type.clone(),
            external_id,
            object_id: subscription.object_id,
        };

        // An unresolvable name fails in `api` below.
        let pinned = match &subscription.node {
            NodeTarget::Index(index) => Some(*index),
            NodeTarget::Name(name) => self.resolve_name(name).ok(),
            NodeTarget::Any | NodeTarget::All => None,
        };
        let (route_id, receiver) = self.hub.router.register(key.clone(), pinned, allocated);
        let reply = match self.api(&command).await {
            Ok(reply) => reply,
            Err(e) => {
                self.hub.router.remove(route_id);
                return Err(e);
            }
        };

        let node = match reply.node_index() {
            Some(index) => {
                self.hub.router.bind(route_id, Some(index));
                NodeTarget::Index(index)
            }
            None => NodeTarget::All,
        };
        self.update_stats(StatsEvent::Subscriptions, 1);
        info!(
            "[EVENTS] Subscribed to {} (external id {}) on {}",
            key.event_type, key.external_id, node
        );
        Ok(SubscriptionHandle {
            route_id,
            key,
            node,
            receiver,
        })
    }

    /// Removes the route and unsubscribes the same triple on the node(s) the
    /// subscription was made on.
    pub async fn unsubscribe(&self, handle: &SubscriptionHandle) -> Result<(), ClusterError> {
        if self.hub.router.remove(handle.route_id) {
            self.update_stats(StatsEvent::Subscriptions, -1);
        }
        let command = unsubscribe_command(&handle.key, handle.node.clone())?;
        self.api(&command).await?;
        info!(
            "[EVENTS] Unsubscribed from {} (external id {})",
            handle.key.event_type, handle.key.external_id
        );
        Ok(())
    }

    /// Drops every route and sends `unsubscribeall` to each ready node.
    /// Nodes that are not connected hold no subscriptions.
    pub async fn unsubscribe_all(&self) -> Result<(), ClusterError> {
        let routes = self.hub.router.len();
        self.hub.router.clear();
        if routes > 0 {
            self.update_stats(StatsEvent::Subscriptions, -(routes as i64));
        }

        let frame = build_command(&unsubscribe_all_command(NodeTarget::All)?)?;
        let ready: Vec<usize> = (0..self.nodes.len())
            .filter(|index| self.nodes[*index].state().is_ready())
            .collect();
        let results = join_all(ready.iter().map(|index| self.call_node(*index, &frame))).await;
        for result in results {
            result?;
        }
        info!("[EVENTS] Unsubscribed from all events on {} node(s)", ready.len());
        Ok(())
    }
}
