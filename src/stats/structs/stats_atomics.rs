use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub requests_sent: AtomicI64,
    pub replies_received: AtomicI64,
    pub requests_failed: AtomicI64,
    pub application_errors: AtomicI64,
    pub failovers: AtomicI64,
    pub fan_outs: AtomicI64,
    pub connects: AtomicI64,
    pub disconnects: AtomicI64,
    pub authentication_failures: AtomicI64,
    pub subscriptions: AtomicI64,
    pub events_routed: AtomicI64,
    pub events_dropped: AtomicI64,
}
