use serde::{Deserialize, Serialize};

/// The ordered node list of one cluster. Immutable once a client is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterConfig {
    pub nodes: Vec<String>,
    pub user: String,
    pub password: String
}
