#![allow(dead_code)]
use chrono::{TimeDelta, Utc};
use evqueue_cluster::config::structs::cluster_config::ClusterConfig;
use evqueue_cluster::websocket::structs::xml_document::XmlDocument;
use evqueue_cluster::websocket::websocket::challenge_response;
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{accept_async, WebSocketStream};

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
pub const TEST_CHALLENGE: &str = "00112233445566778899aabbccddeeff";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Debug)]
pub struct MockNodeOptions {
    pub name: String,
    pub user: String,
    pub password: String,
    pub version: String,
    pub modules: String,
    /// Added to the local clock to produce the node's `time`.
    pub clock_skew: TimeDelta,
    pub reply_delay: Option<Duration>,
    /// Reads the auth frame, then never answers it.
    pub stall_after_auth: bool,
}

impl MockNodeOptions {
    pub fn named(name: &str) -> MockNodeOptions {
        MockNodeOptions {
            name: name.to_string(),
            user: TEST_USER.to_string(),
            password: TEST_PASSWORD.to_string(),
            version: "3.3".to_string(),
            modules: "git,notifications".to_string(),
            clock_skew: TimeDelta::zero(),
            reply_delay: None,
            stall_after_auth: false,
        }
    }
}

#[derive(Default)]
pub struct MockNodeLog {
    pub connections: AtomicUsize,
    pub frames: Mutex<Vec<String>>,
}

/// A minimal evQueue engine: challenge-response handshake, then one reply
/// per command frame.
///
/// Recognised commands: `<hang/>` never gets a reply, `<drop/>` kills the
/// socket, `<fail/>` gets an error frame, `<push event external_id
/// object_id/>` is acknowledged and followed by a matching event frame,
/// `<event action="subscribe">` is acknowledged and, with `send_now="yes"`,
/// followed by an event. Anything else gets a `<response>` echoing the
/// node name, the command's `id` attribute and two rows.
pub struct MockNode {
    pub uri: String,
    pub options: MockNodeOptions,
    pub log: Arc<MockNodeLog>,
    handle: JoinHandle<()>,
}

impl MockNode {
    pub async fn spawn(options: MockNodeOptions) -> MockNode {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let log = Arc::new(MockNodeLog::default());
        let server_options = options.clone();
        let server_log = log.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let options = server_options.clone();
                let log = server_log.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, options, log).await;
                });
            }
        });
        MockNode {
            uri: format!("ws://{}", address),
            options,
            log,
            handle,
        }
    }

    pub fn frames(&self) -> Vec<String> {
        self.log.frames.lock().clone()
    }

    pub fn connections(&self) -> usize {
        self.log.connections.load(Ordering::SeqCst)
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn next_text(read: &mut SplitStream<WebSocketStream<TcpStream>>) -> Option<String> {
    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => return Some(text.as_str().to_string()),
            Ok(Message::Close(_)) | Err(_) => return None,
            Ok(_) => continue,
        }
    }
    None
}

async fn serve(stream: TcpStream, options: MockNodeOptions, log: Arc<MockNodeLog>) -> Result<(), BoxError> {
    let socket = accept_async(stream).await?;
    log.connections.fetch_add(1, Ordering::SeqCst);
    let (mut write, mut read) = socket.split();

    write
        .send(Message::Text(format!(r#"<ready challenge="{}"/>"#, TEST_CHALLENGE).into()))
        .await?;
    let Some(auth) = next_text(&mut read).await else {
        return Ok(());
    };
    if options.stall_after_auth {
        while next_text(&mut read).await.is_some() {}
        return Ok(());
    }
    let auth = XmlDocument::parse(&auth)?;
    let expected = challenge_response(TEST_CHALLENGE, &options.password)?;
    if auth.root().attribute("response") != Some(expected.as_str())
        || auth.root().attribute("user") != Some(options.user.as_str())
    {
        write
            .send(Message::Text(r#"<error code="AUTHENTICATION_FAILED">Invalid credentials</error>"#.to_string().into()))
            .await?;
        write.close().await?;
        return Ok(());
    }

    let server_time = (Utc::now() + options.clock_skew).format("%Y-%m-%d %H:%M:%S");
    write
        .send(Message::Text(
            format!(
                r#"<ready time="{}" node="{}" version="{}" modules="{}"/>"#,
                server_time, options.name, options.version, options.modules
            )
            .into(),
        ))
        .await?;

    while let Some(text) = next_text(&mut read).await {
        log.frames.lock().push(text.clone());
        let document = XmlDocument::parse(&text)?;
        let root = document.root();
        if let Some(delay) = options.reply_delay {
            tokio::time::sleep(delay).await;
        }

        let mut replies = Vec::new();
        match (root.name.as_str(), root.attribute("action").unwrap_or("")) {
            ("hang", _) => {}
            ("drop", _) => return Ok(()),
            ("fail", _) => replies.push(r#"<error code="UNKNOWN_COMMAND">Unknown command</error>"#.to_string()),
            ("push", _) => {
                replies.push(r#"<response status="OK"/>"#.to_string());
                replies.push(event_frame(
                    root.attribute("event").unwrap_or("TEST_EVENT"),
                    root.attribute("external_id").unwrap_or("0"),
                    root.attribute("object_id"),
                ));
            }
            ("event", "subscribe") => {
                replies.push(r#"<response status="OK"/>"#.to_string());
                if root.attribute("send_now") == Some("yes") {
                    replies.push(event_frame(
                        root.attribute("type").unwrap_or(""),
                        root.attribute("external_id").unwrap_or("0"),
                        root.attribute("object_id"),
                    ));
                }
            }
            ("event", _) => replies.push(r#"<response status="OK"/>"#.to_string()),
            (group, action) => replies.push(format!(
                r#"<response status="OK" node="{}" group="{}" action="{}" echo="{}"><row id="1"/><row id="2"/></response>"#,
                options.name,
                group,
                action,
                root.attribute("id").unwrap_or("")
            )),
        }
        for reply in replies {
            write.send(Message::Text(reply.into())).await?;
        }
    }
    Ok(())
}

fn event_frame(event: &str, external_id: &str, object_id: Option<&str>) -> String {
    match object_id {
        Some(object_id) => format!(
            r#"<response event="{}" external_id="{}" object_id="{}"><instance id="{}"/></response>"#,
            event, external_id, object_id, object_id
        ),
        None => format!(r#"<response event="{}" external_id="{}"/>"#, event, external_id),
    }
}

/// A `ws://` URI on which nothing listens.
pub fn dead_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("ws://{}", address)
}

pub fn cluster_config(nodes: Vec<String>) -> ClusterConfig {
    ClusterConfig::new(nodes, TEST_USER, TEST_PASSWORD)
}

/// Polls `condition` every 10 ms, for at most two seconds.
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
