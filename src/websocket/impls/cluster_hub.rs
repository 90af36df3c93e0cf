use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::websocket::enums::node_state::NodeState;
use crate::websocket::structs::cluster_hub::ClusterHub;
use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::event_router::EventRouter;
use crate::websocket::structs::node_state_change::NodeStateChange;
use crate::websocket::traits::node_observer::NodeObserver;
use crate::websocket::types::{SharedTopology, StateObserver};
use log::{debug, warn};
use parking_lot::RwLock;
use std::sync::Arc;

impl ClusterHub {
    pub fn new(descriptors: Vec<String>, topology: SharedTopology) -> ClusterHub {
        {
            let mut shared = topology.write();
            if shared.is_empty() {
                shared.ensure_nodes(&descriptors);
            }
        }
        ClusterHub {
            descriptors,
            topology,
            observers: RwLock::new(Vec::new()),
            router: EventRouter::new(),
            stats: Arc::new(StatsAtomics::new()),
        }
    }

    pub fn add_observer(&self, observer: StateObserver) {
        self.observers.write().push(observer);
    }

    /// Nodes are matched by descriptor; their name is unknown until ready.
    pub fn index_of(&self, descriptor: &str) -> Option<usize> {
        self.descriptors.iter().position(|known| known == descriptor)
    }
}

impl NodeObserver for ClusterHub {
    fn state_changed(&self, change: NodeStateChange) {
        let Some(index) = self.index_of(&change.descriptor) else {
            warn!("[CLUSTER] State change from unknown node {}", change.descriptor);
            return;
        };

        let Some((previous, info)) = self.topology.write().apply(index, &change) else {
            warn!("[CLUSTER] Topology has no slot for node #{}", index);
            return;
        };
        debug!("[CLUSTER] Node #{} {} -> {}", index, previous, info.state);

        if info.state == NodeState::Ready && previous != NodeState::Ready {
            self.stats.update_stats(StatsEvent::Connects, 1);
        }
        if previous == NodeState::Ready && info.state != NodeState::Ready {
            self.stats.update_stats(StatsEvent::Disconnects, 1);
        }

        let observers = self.observers.read().clone();
        for observer in observers {
            observer(index, &info);
        }
    }

    fn event_received(&self, event: EventFrame) {
        let delivered = self.router.dispatch(&event);
        if delivered == 0 {
            debug!(
                "[EVENTS] No subscriber for event {:?} (external id {:?}, object id {:?})",
                event.event_type, event.external_id, event.object_id
            );
            self.stats.update_stats(StatsEvent::EventsDropped, 1);
        } else {
            self.stats.update_stats(StatsEvent::EventsRouted, delivered as i64);
        }
    }
}
