use chrono::{DateTime, Utc};

/// What the server tells about itself once the handshake succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyFrame {
    pub server_time: DateTime<Utc>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub modules: Vec<String>,
}
