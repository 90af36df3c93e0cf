use crate::websocket::structs::event_frame::EventFrame;
use crate::websocket::structs::node_state_change::NodeStateChange;

/// Receives what a node connection reports outside of request/reply.
///
/// Called from the connection's reader task; implementations must not block.
pub trait NodeObserver: Send + Sync {
    fn state_changed(&self, change: NodeStateChange);

    fn event_received(&self, event: EventFrame);
}
