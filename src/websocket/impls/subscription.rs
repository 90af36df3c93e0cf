use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::structs::api_command::ApiCommand;
use crate::websocket::structs::subscription::Subscription;

impl Subscription {
    pub fn new(event_type: &str, command: ApiCommand) -> Subscription {
        Subscription {
            event_type: event_type.to_string(),
            command,
            send_now: false,
            object_id: None,
            external_id: None,
            node: NodeTarget::Any,
        }
    }

    /// Ask the server to push the current state right away.
    pub fn send_now(mut self, send_now: bool) -> Subscription {
        self.send_now = send_now;
        self
    }

    pub fn object_id(mut self, object_id: u64) -> Subscription {
        self.object_id = Some(object_id);
        self
    }

    pub fn external_id(mut self, external_id: u64) -> Subscription {
        self.external_id = Some(external_id);
        self
    }

    pub fn node(mut self, node: NodeTarget) -> Subscription {
        self.node = node;
        self
    }
}
