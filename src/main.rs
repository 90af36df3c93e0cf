use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use serde_json::json;
use tokio::runtime::Builder;
use evqueue_cluster::common::common::setup_logging;
use evqueue_cluster::config::structs::configuration::Configuration;
use evqueue_cluster::structs::{Cli, CliCommand};
use evqueue_cluster::websocket::enums::api_reply::ApiReply;
use evqueue_cluster::websocket::enums::node_target::NodeTarget;
use evqueue_cluster::websocket::errors::ClusterError;
use evqueue_cluster::websocket::structs::api_command::ApiCommand;
use evqueue_cluster::websocket::structs::cluster_client::ClusterClient;
use evqueue_cluster::websocket::structs::subscription::Subscription;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    let code = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let client = match ClusterClient::new(&config.cluster) {
                Ok(client) => client,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    return 101;
                }
            };

            let result = match args.command {
                CliCommand::Status => run_status(&client).await,
                CliCommand::Api { group, action, node, all, attributes, parameters, modules } => {
                    let target = if all { NodeTarget::All } else { node.as_deref().map(NodeTarget::from).unwrap_or_default() };
                    run_api(&client, &group, &action, target, attributes, parameters, modules).await
                }
                CliCommand::Watch { event_type, group, action, object_id, node, attributes } => {
                    let target = node.as_deref().map(NodeTarget::from).unwrap_or_default();
                    run_watch(&client, &event_type, &group, &action, object_id, target, attributes).await
                }
            };

            client.close_all().await;
            info!("[STATS] {}", json!(client.get_stats()));
            match result {
                Ok(_) => 0,
                Err(e) => {
                    error!("{}", e);
                    if e.is_authentication() { 2 } else { 1 }
                }
            }
        });

    if code != 0 {
        exit(code);
    }
    Ok(())
}

async fn run_status(client: &ClusterClient) -> Result<(), ClusterError>
{
    for (index, result) in client.connect_all().await.into_iter().enumerate() {
        if let Err(e) = result {
            warn!("[STATUS] Node #{} failed to connect: {}", index, e);
        }
    }
    let nodes = client.nodes_info();
    println!("{}", serde_json::to_string_pretty(&nodes).unwrap_or_default());
    if nodes.iter().any(|node| node.is_ready()) {
        Ok(())
    } else {
        Err(ClusterError::NoNodesAvailable)
    }
}

async fn run_api(
    client: &ClusterClient,
    group: &str,
    action: &str,
    target: NodeTarget,
    attributes: Vec<(String, String)>,
    parameters: Vec<(String, String)>,
    modules: Vec<String>,
) -> Result<(), ClusterError>
{
    let mut builder = ApiCommand::builder(group, action).node(target);
    for (key, value) in attributes {
        builder = builder.attribute(&key, value);
    }
    for (name, value) in parameters {
        builder = builder.parameter(&name, value);
    }
    for module in modules {
        builder = builder.required_module(&module);
    }
    let reply = client.api(&builder.build()?).await?;

    let output = match &reply {
        ApiReply::Node { index, document } => json!({ "node": index, "response": document.response().to_json() }),
        ApiReply::Cluster(documents) => json!(documents
            .iter()
            .enumerate()
            .map(|(index, document)| json!({ "node": index, "response": document.response().to_json() }))
            .collect::<Vec<_>>()),
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
    Ok(())
}

async fn run_watch(
    client: &ClusterClient,
    event_type: &str,
    group: &str,
    action: &str,
    object_id: Option<u64>,
    target: NodeTarget,
    attributes: Vec<(String, String)>,
) -> Result<(), ClusterError>
{
    let mut builder = ApiCommand::builder(group, action);
    for (key, value) in attributes {
        builder = builder.attribute(&key, value);
    }
    let mut subscription = Subscription::new(event_type, builder.build()?).send_now(true).node(target);
    if let Some(object_id) = object_id {
        subscription = subscription.object_id(object_id);
    }

    let mut handle = client.subscribe(subscription).await?;
    info!("[WATCH] Waiting for {} events, press Ctrl-C to stop", event_type);
    loop {
        tokio::select! {
            event = handle.next_event() => match event {
                Some(event) => {
                    let output = json!({
                        "node": event.node_index,
                        "event": event.event_type,
                        "external_id": event.external_id,
                        "object_id": event.object_id,
                        "response": event.response().to_json(),
                    });
                    println!("{}", output);
                }
                None => {
                    warn!("[WATCH] Subscription closed");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("[WATCH] Interrupted, unsubscribing");
                break;
            }
        }
    }
    client.unsubscribe(&handle).await
}
