//! Statistics event types for tracking cluster client activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `ClusterClient::update_stats()`; positive values add to the
/// counter, negative values subtract from it.
///
/// # Categories
///
/// - **Requests**: RequestsSent, RepliesReceived, RequestsFailed, Failovers, FanOuts
/// - **Connections**: Connects, Disconnects, AuthenticationFailures
/// - **Events**: Subscriptions, EventsRouted, EventsDropped
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    RequestsSent,
    RepliesReceived,
    RequestsFailed,
    ApplicationErrors,
    Failovers,
    FanOuts,
    Connects,
    Disconnects,
    AuthenticationFailures,
    Subscriptions,
    EventsRouted,
    EventsDropped,
}
