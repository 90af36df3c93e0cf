mod common;

use chrono::{TimeDelta, Utc};
use common::{MockNode, MockNodeOptions, TEST_PASSWORD, TEST_USER};
use evqueue_cluster::websocket::encoding::encoder::build_command;
use evqueue_cluster::websocket::enums::node_error_kind::NodeErrorKind;
use evqueue_cluster::websocket::enums::node_state::NodeState;
use evqueue_cluster::websocket::errors::ClusterError;
use evqueue_cluster::websocket::structs::api_command::ApiCommand;
use evqueue_cluster::websocket::structs::event_frame::EventFrame;
use evqueue_cluster::websocket::structs::node_connection::NodeConnection;
use evqueue_cluster::websocket::structs::node_credentials::NodeCredentials;
use evqueue_cluster::websocket::structs::node_state_change::NodeStateChange;
use evqueue_cluster::websocket::traits::node_backend::NodeBackend;
use evqueue_cluster::websocket::traits::node_observer::NodeObserver;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct RecordingObserver {
    states: Mutex<Vec<NodeState>>,
    events: Mutex<Vec<EventFrame>>,
}

impl NodeObserver for RecordingObserver {
    fn state_changed(&self, change: NodeStateChange) {
        self.states.lock().push(change.state);
    }

    fn event_received(&self, event: EventFrame) {
        self.events.lock().push(event);
    }
}

fn connection(uri: &str, password: &str, observer: Option<Arc<dyn NodeObserver>>) -> NodeConnection {
    NodeConnection::new(0, uri, NodeCredentials::new(TEST_USER, password), observer)
}

fn frame(group: &str, action: &str) -> String {
    build_command(&ApiCommand::builder(group, action).build().unwrap()).unwrap()
}

#[tokio::test]
async fn test_handshake_reaches_ready() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let observer = Arc::new(RecordingObserver::default());
    let connection = connection(&node.uri, TEST_PASSWORD, Some(observer.clone()));
    assert_eq!(connection.state(), NodeState::Disconnected);

    connection.connect().await.unwrap();

    assert_eq!(connection.state(), NodeState::Ready);
    let status = connection.status();
    assert_eq!(status.name.as_deref(), Some("node-a"));
    assert_eq!(status.version.as_deref(), Some("3.3"));
    assert_eq!(status.modules, vec!["git", "notifications"]);
    assert_eq!(connection.last_error(), None);
    assert_eq!(
        *observer.states.lock(),
        vec![NodeState::Connecting, NodeState::Authenticating, NodeState::Ready]
    );
    assert_eq!(node.connections(), 1);
}

#[tokio::test]
async fn test_clock_offset_is_local_minus_server() {
    let mut options = MockNodeOptions::named("node-a");
    options.clock_skew = TimeDelta::hours(-1);
    let node = MockNode::spawn(options).await;
    let connection = connection(&node.uri, TEST_PASSWORD, None);
    connection.connect().await.unwrap();

    let offset = connection.clock_offset().unwrap();
    assert!(offset > TimeDelta::seconds(3590) && offset < TimeDelta::seconds(3610), "offset {}", offset);
    let server_now = connection.server_now().unwrap();
    let expected = Utc::now() - TimeDelta::hours(1);
    assert!((server_now - expected).num_seconds().abs() < 5);
}

#[tokio::test]
async fn test_request_before_connect_fails_without_socket() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = connection(&node.uri, TEST_PASSWORD, None);

    let result = connection.request(frame("status", "query")).await;

    assert_eq!(result, Err(ClusterError::NotReady(NodeState::Disconnected)));
    assert_eq!(node.connections(), 0);
}

#[tokio::test]
async fn test_request_reply() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = connection(&node.uri, TEST_PASSWORD, None);
    connection.connect().await.unwrap();

    let reply = connection.request(frame("workflows", "list")).await.unwrap();

    assert_eq!(reply.root().attribute("node"), Some("node-a"));
    assert_eq!(reply.root().attribute("group"), Some("workflows"));
    assert_eq!(reply.response().rows.len(), 2);
    assert_eq!(node.frames(), vec![r#"<workflows action="list"/>"#.to_string()]);
}

#[tokio::test]
async fn test_concurrent_requests_are_serialized() {
    let mut options = MockNodeOptions::named("node-a");
    options.reply_delay = Some(Duration::from_millis(5));
    let node = MockNode::spawn(options).await;
    let connection = Arc::new(connection(&node.uri, TEST_PASSWORD, None));
    connection.connect().await.unwrap();

    let mut tasks = Vec::new();
    for id in 0..8 {
        let connection = connection.clone();
        tasks.push(tokio::spawn(async move {
            let command = ApiCommand::builder("instance", "query").attribute("id", id).build().unwrap();
            let reply = connection.request(build_command(&command).unwrap()).await.unwrap();
            (id, reply.root().attribute("echo").map(str::to_string))
        }));
    }
    for task in tasks {
        let (id, echo) = task.await.unwrap();
        assert_eq!(echo, Some(id.to_string()));
    }
    assert_eq!(node.frames().len(), 8);
}

#[tokio::test]
async fn test_close_rejects_in_flight_request() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = Arc::new(connection(&node.uri, TEST_PASSWORD, None));
    connection.connect().await.unwrap();

    let pending = {
        let connection = connection.clone();
        tokio::spawn(async move { connection.request(frame("hang", "forever")).await })
    };
    assert!(common::wait_until(|| node.frames().len() == 1).await);

    connection.close().await;

    let result = tokio::time::timeout(Duration::from_secs(2), pending).await.unwrap().unwrap();
    assert!(matches!(result, Err(ClusterError::Transport(_))));
    assert_eq!(connection.state(), NodeState::Disconnected);
}

#[tokio::test]
async fn test_node_dropping_socket_fails_request() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = connection(&node.uri, TEST_PASSWORD, None);
    connection.connect().await.unwrap();

    let result = tokio::time::timeout(Duration::from_secs(2), connection.request(frame("drop", "now")))
        .await
        .unwrap();

    assert!(matches!(result, Err(ClusterError::Transport(_))));
    assert_eq!(connection.state(), NodeState::Disconnected);
    assert_eq!(connection.last_error(), Some(NodeErrorKind::Transport));
}

#[tokio::test]
async fn test_reconnect_after_close() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = connection(&node.uri, TEST_PASSWORD, None);
    connection.connect().await.unwrap();
    connection.close().await;
    assert!(matches!(
        connection.request(frame("status", "query")).await,
        Err(ClusterError::NotReady(NodeState::Disconnected))
    ));

    connection.connect().await.unwrap();
    assert!(connection.request(frame("status", "query")).await.is_ok());
    assert_eq!(node.connections(), 2);
}

#[tokio::test]
async fn test_wrong_password_is_authentication_error() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let connection = connection(&node.uri, "not-the-password", None);

    let result = connection.connect().await;

    assert!(matches!(result, Err(ClusterError::Authentication(_))));
    assert_eq!(connection.state(), NodeState::Error);
    assert_eq!(connection.last_error(), Some(NodeErrorKind::Authentication));
}

#[tokio::test]
async fn test_unreachable_node_is_transport_error() {
    let connection = connection(&common::dead_uri(), TEST_PASSWORD, None);

    let result = connection.connect().await;

    assert!(matches!(result, Err(ClusterError::Transport(_))));
    assert_eq!(connection.state(), NodeState::Error);
    assert_eq!(connection.last_error(), Some(NodeErrorKind::Transport));
}

#[tokio::test]
async fn test_event_frames_reach_observer() {
    let node = MockNode::spawn(MockNodeOptions::named("node-a")).await;
    let observer = Arc::new(RecordingObserver::default());
    let connection = connection(&node.uri, TEST_PASSWORD, Some(observer.clone()));
    connection.connect().await.unwrap();

    let command = ApiCommand::builder("push", "now")
        .attribute("event", "INSTANCE_STARTED")
        .attribute("external_id", 42)
        .attribute("object_id", 7)
        .build()
        .unwrap();
    let reply = connection.request(build_command(&command).unwrap()).await.unwrap();
    assert_eq!(reply.root().attribute("status"), Some("OK"));

    assert!(common::wait_until(|| observer.events.lock().len() == 1).await);
    let event = observer.events.lock()[0].clone();
    assert_eq!(event.event_type.as_deref(), Some("INSTANCE_STARTED"));
    assert_eq!(event.external_id, Some(42));
    assert_eq!(event.object_id, Some(7));
    assert_eq!(event.response().rows.len(), 1);

    // The event must not have been taken as the reply of the next request.
    let next = connection.request(frame("status", "query")).await.unwrap();
    assert_eq!(next.root().attribute("group"), Some("status"));
}

#[tokio::test]
async fn test_close_during_handshake_releases_connect() {
    let mut options = MockNodeOptions::named("node-a");
    options.stall_after_auth = true;
    let node = MockNode::spawn(options).await;
    let connection = Arc::new(connection(&node.uri, TEST_PASSWORD, None));

    let first = {
        let connection = connection.clone();
        tokio::spawn(async move { connection.connect().await })
    };
    assert!(common::wait_until(|| connection.state() == NodeState::Authenticating).await);

    connection.close().await;

    let result = tokio::time::timeout(Duration::from_secs(2), first).await.unwrap().unwrap();
    assert!(matches!(result, Err(ClusterError::Transport(_))));
    assert_eq!(connection.state(), NodeState::Disconnected);

    // The connect lock is free again: a second attempt reaches the node.
    let second = {
        let connection = connection.clone();
        tokio::spawn(async move { connection.connect().await })
    };
    assert!(common::wait_until(|| node.connections() == 2).await);
    assert!(common::wait_until(|| connection.state() == NodeState::Authenticating).await);

    connection.close().await;

    let result = tokio::time::timeout(Duration::from_secs(2), second).await.unwrap().unwrap();
    assert!(matches!(result, Err(ClusterError::Transport(_))));
    assert_eq!(connection.state(), NodeState::Disconnected);
}
