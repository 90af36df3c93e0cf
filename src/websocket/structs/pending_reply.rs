use crate::websocket::types::ReplySender;
use tokio::sync::OwnedSemaphorePermit;

/// The single request in flight on a connection.
///
/// The gate permit travels with the reply slot: it is released when the reply
/// is delivered or the connection fails, never when the caller gives up
/// waiting, so the next request cannot pick up a stale reply.
pub struct PendingReply {
    pub reply: ReplySender,
    pub permit: OwnedSemaphorePermit,
}
