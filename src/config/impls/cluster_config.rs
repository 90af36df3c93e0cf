use std::collections::HashSet;
use crate::config::structs::cluster_config::ClusterConfig;

impl ClusterConfig {
    pub fn new(nodes: Vec<String>, user: &str, password: &str) -> ClusterConfig {
        ClusterConfig {
            nodes,
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    /// First problem found with the node list or credentials, if any.
    pub fn check(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(String::from("cluster.nodes must list at least one node"));
        }
        let mut seen = HashSet::new();
        for node in &self.nodes {
            let scheme = node.split_once("://").map(|(scheme, _)| scheme.to_ascii_lowercase());
            match scheme.as_deref() {
                Some("ws") | Some("wss") => {}
                _ => return Err(format!("cluster node \"{}\" is not a ws:// or wss:// URI", node)),
            }
            if !seen.insert(node.as_str()) {
                return Err(format!("cluster node \"{}\" is listed twice", node));
            }
        }
        if self.user.trim().is_empty() {
            return Err(String::from("cluster.user must not be empty"));
        }
        Ok(())
    }
}
