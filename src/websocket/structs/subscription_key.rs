use serde::{Deserialize, Serialize};

/// The triple an event frame is routed by.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionKey {
    pub event_type: String,
    pub external_id: u64,
    pub object_id: Option<u64>,
}
