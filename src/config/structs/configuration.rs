use serde::{Deserialize, Serialize};
use crate::config::structs::cluster_config::ClusterConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig
}
