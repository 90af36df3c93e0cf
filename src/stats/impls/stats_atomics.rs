use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            requests_sent: self.requests_sent.load(Ordering::SeqCst),
            replies_received: self.replies_received.load(Ordering::SeqCst),
            requests_failed: self.requests_failed.load(Ordering::SeqCst),
            application_errors: self.application_errors.load(Ordering::SeqCst),
            failovers: self.failovers.load(Ordering::SeqCst),
            fan_outs: self.fan_outs.load(Ordering::SeqCst),
            connects: self.connects.load(Ordering::SeqCst),
            disconnects: self.disconnects.load(Ordering::SeqCst),
            authentication_failures: self.authentication_failures.load(Ordering::SeqCst),
            subscriptions: self.subscriptions.load(Ordering::SeqCst),
            events_routed: self.events_routed.load(Ordering::SeqCst),
            events_dropped: self.events_dropped.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::RequestsSent => &self.requests_sent,
            StatsEvent::RepliesReceived => &self.replies_received,
            StatsEvent::RequestsFailed => &self.requests_failed,
            StatsEvent::ApplicationErrors => &self.application_errors,
            StatsEvent::Failovers => &self.failovers,
            StatsEvent::FanOuts => &self.fan_outs,
            StatsEvent::Connects => &self.connects,
            StatsEvent::Disconnects => &self.disconnects,
            StatsEvent::AuthenticationFailures => &self.authentication_failures,
            StatsEvent::Subscriptions => &self.subscriptions,
            StatsEvent::EventsRouted => &self.events_routed,
            StatsEvent::EventsDropped => &self.events_dropped,
        }
    }
}
