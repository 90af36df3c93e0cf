use evqueue_cluster::config::enums::configuration_error::ConfigurationError;
use evqueue_cluster::config::structs::configuration::Configuration;
use evqueue_cluster::websocket::structs::cluster_client::ClusterClient;
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
log_level = "debug"

[cluster]
nodes = ["ws://10.0.0.1:5000", "wss://10.0.0.2:5000"]
user = "operator"
password = "s3cret"

[sentry_config]
enabled = false
dsn = ""
debug = false
sample_rate = 1.0
max_breadcrumbs = 100
attach_stacktrace = true
send_default_pii = false
traces_sample_rate = 1.0
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file_builds_client() {
    let file = write_config(CONFIG);

    let config = Configuration::load_from_file(file.path().to_str().unwrap(), false).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.cluster.user, "operator");
    let client = ClusterClient::new(&config.cluster).unwrap();
    assert_eq!(client.len(), 2);
    let descriptors: Vec<_> = client.nodes_info().into_iter().map(|info| info.descriptor).collect();
    assert_eq!(descriptors, vec!["ws://10.0.0.1:5000", "wss://10.0.0.2:5000"]);
}

#[test]
fn test_load_from_file_rejects_duplicate_nodes() {
    let file = write_config(&CONFIG.replace("wss://10.0.0.2:5000", "ws://10.0.0.1:5000"));

    let result = Configuration::load_from_file(file.path().to_str().unwrap(), false);

    assert!(matches!(result, Err(ConfigurationError::ValidationError(_))));
}

#[test]
fn test_create_config_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    assert!(Configuration::load_from_file(path, true).is_err());

    let created = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(created.cluster.nodes, vec!["ws://127.0.0.1:5000"]);
    assert_eq!(created.cluster.user, "admin");
}

#[test]
fn test_missing_file_without_create() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Configuration::load_from_file(path.to_str().unwrap(), false);

    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
    assert!(!path.exists());
}
