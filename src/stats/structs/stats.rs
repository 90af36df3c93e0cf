use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub requests_sent: i64,
    pub replies_received: i64,
    pub requests_failed: i64,
    pub application_errors: i64,
    pub failovers: i64,
    pub fan_outs: i64,
    pub connects: i64,
    pub disconnects: i64,
    pub authentication_failures: i64,
    pub subscriptions: i64,
    pub events_routed: i64,
    pub events_dropped: i64,
}
