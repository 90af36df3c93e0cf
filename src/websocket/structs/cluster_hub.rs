use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::websocket::structs::event_router::EventRouter;
use crate::websocket::types::{SharedTopology, StateObserver};
use parking_lot::RwLock;
use std::sync::Arc;

/// Receives every node callback of one client: updates the shared topology,
/// notifies registered observers and routes event frames.
pub struct ClusterHub {
    pub descriptors: Vec<String>,
    pub topology: SharedTopology,
    pub observers: RwLock<Vec<StateObserver>>,
    pub router: EventRouter,
    pub stats: Arc<StatsAtomics>,
}
