use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::structs::api_command::ApiCommand;

/// What to subscribe to: an event type, the command the server runs to build
/// each event payload, and the optional filters echoed back on every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub event_type: String,
    pub command: ApiCommand,
    pub send_now: bool,
    pub object_id: Option<u64>,
    pub external_id: Option<u64>,
    pub node: NodeTarget,
}
