use crate::config::structs::cluster_config::ClusterConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::utils::sentry_tracing::{finish_trace_transaction, start_trace_transaction};
use crate::websocket::encoding::encoder::{build_command, check_reply};
use crate::websocket::enums::api_reply::ApiReply;
use crate::websocket::enums::node_state::NodeState;
use crate::websocket::enums::node_target::NodeTarget;
use crate::websocket::errors::ClusterError;
use crate::websocket::structs::api_command::ApiCommand;
use crate::websocket::structs::cluster_client::ClusterClient;
use crate::websocket::structs::cluster_hub::ClusterHub;
use crate::websocket::structs::cluster_topology::ClusterTopology;
use crate::websocket::structs::node_connection::NodeConnection;
use crate::websocket::structs::node_credentials::NodeCredentials;
use crate::websocket::structs::node_info::NodeInfo;
use crate::websocket::structs::xml_document::XmlDocument;
use crate::websocket::traits::node_backend::NodeBackend;
use crate::websocket::traits::node_observer::NodeObserver;
use crate::websocket::types::SharedTopology;
use futures_util::future::join_all;
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

impl ClusterClient {
    pub fn new(config: &ClusterConfig) -> Result<ClusterClient, ClusterError> {
        Self::with_topology(config, Arc::new(RwLock::new(ClusterTopology::default())))
    }

    /// Builds a client that records node state into `topology`, which may be
    /// shared with other clients of the same cluster. A topology already in
    /// use must list the same nodes in the same order.
    pub fn with_topology(config: &ClusterConfig, topology: SharedTopology) -> Result<ClusterClient, ClusterError> {
        config.check().map_err(ClusterError::InvalidConfiguration)?;
        {
            let shared = topology.read();
            if !shared.is_empty() && shared.descriptors != config.nodes {
                return Err(ClusterError::InvalidConfiguration(
                    "shared topology lists different nodes".to_string(),
                ));
            }
        }
        let hub = Arc::new(ClusterHub::new(config.nodes.clone(), topology));
        let observer: Arc<dyn NodeObserver> = hub.clone();
        let nodes = config
            .nodes
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let credentials = NodeCredentials::new(&config.user, &config.password);
                Arc::new(NodeConnection::new(index, descriptor, credentials, Some(observer.clone()))) as Arc<dyn NodeBackend>
            })
            .collect();
        info!("[CLUSTER] Client created for {} node(s)", config.nodes.len());
        Ok(ClusterClient {
            nodes,
            hub,
            next_external_id: AtomicU64::new(1),
        })
    }

    /// Builds a client over ready-made node backends, in node order.
    pub fn with_backends(backends: Vec<Arc<dyn NodeBackend>>) -> ClusterClient {
        let descriptors = backends.iter().map(|backend| backend.descriptor()).collect();
        let topology = Arc::new(RwLock::new(ClusterTopology::default()));
        ClusterClient {
            nodes: backends,
            hub: Arc::new(ClusterHub::new(descriptors, topology)),
            next_external_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Arc<dyn NodeBackend>> {
        self.nodes.get(index)
    }

    pub fn topology(&self) -> ClusterTopology {
        self.hub.topology.read().clone()
    }

    pub fn shared_topology(&self) -> SharedTopology {
        self.hub.topology.clone()
    }

    pub fn nodes_info(&self) -> Vec<NodeInfo> {
        self.hub.topology.read().nodes()
    }

    /// Registers a callback run after every topology change, with the node
    /// index and its updated row.
    pub fn on_state_change<F>(&self, callback: F)
    where
        F: Fn(usize, &NodeInfo) + Send + Sync + 'static,
    {
        self.hub.add_observer(Arc::new(callback));
    }

    pub fn get_stats(&self) -> Stats {
        self.hub.stats.get_stats()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats {
        self.hub.stats.update_stats(event, value)
    }

    /// Next external id not used by a live route, so ids picked by the
    /// caller are never handed out again.
    pub(crate) fn allocate_external_id(&self) -> u64 {
        loop {
            let external_id = self.next_external_id.fetch_add(1, Ordering::SeqCst);
            if !self.hub.router.contains_external_id(external_id) {
                return external_id;
            }
        }
    }

    /// Sends `command` to the node(s) it targets.
    ///
    /// With `NodeTarget::Any` the nodes are tried in configuration order,
    /// healthy ones first; only transport failures move on to the next node.
    /// `NodeTarget::All` fails as a whole if any node fails. A pinned node is
    /// never substituted.
    pub async fn api(&self, command: &ApiCommand) -> Result<ApiReply, ClusterError> {
        let transaction = start_trace_transaction("cluster_api", &format!("{}:{}", command.group(), command.action()));
        let result = self.dispatch(command).await;
        finish_trace_transaction(transaction, &result);
        result
    }

    async fn dispatch(&self, command: &ApiCommand) -> Result<ApiReply, ClusterError> {
        let frame = build_command(command)?;
        match command.node() {
            NodeTarget::Any => self.call_any(command, &frame).await,
            NodeTarget::All => self.call_all(command, &frame).await.map(ApiReply::Cluster),
            NodeTarget::Name(name) => {
                let index = self.resolve_name_connecting(name).await?;
                self.call_pinned(index, command, &frame).await
            }
            NodeTarget::Index(index) => {
                if *index >= self.nodes.len() {
                    return Err(ClusterError::UnknownNode(format!("#{}", index)));
                }
                self.call_pinned(*index, command, &frame).await
            }
        }
    }

    /// Node names come from the topology; a descriptor is accepted too.
    pub fn resolve_name(&self, name: &str) -> Result<usize, ClusterError> {
        let topology = self.hub.topology.read();
        topology
            .index_of_name(name)
            .or_else(|| topology.index_of_descriptor(name))
            .filter(|index| *index < self.nodes.len())
            .ok_or_else(|| ClusterError::UnknownNode(name.to_string()))
    }

    /// `resolve_name`, connecting the nodes that have not reported a name
    /// yet when `name` is unknown. A fresh client knows no names.
    async fn resolve_name_connecting(&self, name: &str) -> Result<usize, ClusterError> {
        if let Ok(index) = self.resolve_name(name) {
            return Ok(index);
        }
        let unnamed: Vec<usize> = {
            let topology = self.hub.topology.read();
            (0..self.nodes.len())
                .filter(|index| self.nodes[*index].state() != NodeState::Ready)
                .filter(|index| topology.node(*index).is_none_or(|info| info.name.is_none()))
                .collect()
        };
        if unnamed.is_empty() {
            return Err(ClusterError::UnknownNode(name.to_string()));
        }

        debug!("[CLUSTER] Connecting {} node(s) to resolve '{}'", unnamed.len(), name);
        let results = join_all(unnamed.iter().map(|index| self.nodes[*index].connect())).await;
        let mut authentication = None;
        for error in results.into_iter().filter_map(Result::err) {
            if error.is_authentication() {
                self.update_stats(StatsEvent::AuthenticationFailures, 1);
                authentication.get_or_insert(error);
            }
        }
        match (self.resolve_name(name), authentication) {
            (Ok(index), _) => Ok(index),
            (Err(_), Some(error)) => Err(error),
            (Err(e), None) => Err(e),
        }
    }

    /// "Any node" order: nodes not in ERROR first, then the failed ones, each
    /// group in configuration order. Nodes known to lack a required module
    /// are left out.
    fn any_candidates(&self, required_modules: &[String]) -> Vec<usize> {
        let (healthy, failed): (Vec<usize>, Vec<usize>) =
            (0..self.nodes.len()).partition(|index| self.nodes[*index].state() != NodeState::Error);
        let topology = self.hub.topology.read();
        healthy
            .into_iter()
            .chain(failed)
            .filter(|index| topology.missing_module(*index, required_modules).is_none())
            .collect()
    }

    fn check_modules(&self, index: usize, command: &ApiCommand) -> Result<(), ClusterError> {
        let topology = self.hub.topology.read();
        match topology.missing_module(index, command.required_modules()) {
            Some(module) => Err(ClusterError::ModuleUnavailable {
                node: topology
                    .node(index)
                    .map(|info| info.label().to_string())
                    .unwrap_or_else(|| format!("#{}", index)),
                module: module.to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn call_any(&self, command: &ApiCommand, frame: &str) -> Result<ApiReply, ClusterError> {
        let candidates = self.any_candidates(command.required_modules());
        for (attempt, index) in candidates.into_iter().enumerate() {
            if attempt > 0 {
                self.update_stats(StatsEvent::Failovers, 1);
            }
            match self.call_node(index, frame).await {
                Ok(document) => return Ok(ApiReply::Node { index, document }),
                Err(e) if e.is_retryable() => {
                    warn!("[CLUSTER] Node #{} unavailable ({}), trying the next node", index, e);
                }
                Err(e) => return Err(e),
            }
        }
        warn!("[CLUSTER] No node could serve {}:{}", command.group(), command.action());
        Err(ClusterError::NoNodesAvailable)
    }

    async fn call_all(&self, command: &ApiCommand, frame: &str) -> Result<Vec<XmlDocument>, ClusterError> {
        if self.nodes.is_empty() {
            return Err(ClusterError::NoNodesAvailable);
        }
        for index in 0..self.nodes.len() {
            self.check_modules(index, command)?;
        }
        self.update_stats(StatsEvent::FanOuts, 1);

        let results = join_all((0..self.nodes.len()).map(|index| self.call_node(index, frame))).await;
        let mut documents = Vec::with_capacity(results.len());
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(document) => documents.push(document),
                Err(e) => {
                    warn!("[CLUSTER] Fan-out of {}:{} failed on node #{}: {}", command.group(), command.action(), index, e);
                    return Err(e);
                }
            }
        }
        Ok(documents)
    }

    async fn call_pinned(&self, index: usize, command: &ApiCommand, frame: &str) -> Result<ApiReply, ClusterError> {
        self.check_modules(index, command)?;
        let document = self.call_node(index, frame).await?;
        Ok(ApiReply::Node { index, document })
    }

    /// One request on node `index`, connecting it first when needed. Error
    /// replies become `ClusterError::Application` here.
    pub(crate) async fn call_node(&self, index: usize, frame: &str) -> Result<XmlDocument, ClusterError> {
        let node = self
            .nodes
            .get(index)
            .ok_or_else(|| ClusterError::UnknownNode(format!("#{}", index)))?;

        if node.state() != NodeState::Ready {
            debug!("[CLUSTER] Connecting node #{} ({})", index, node.descriptor());
            if let Err(e) = node.connect().await {
                if e.is_authentication() {
                    self.update_stats(StatsEvent::AuthenticationFailures, 1);
                }
                return Err(e);
            }
        }

        self.update_stats(StatsEvent::RequestsSent, 1);
        match node.request(frame.to_string()).await {
            Ok(document) => {
                self.update_stats(StatsEvent::RepliesReceived, 1);
                if let Err(e) = check_reply(&document) {
                    self.update_stats(StatsEvent::ApplicationErrors, 1);
                    return Err(e);
                }
                Ok(document)
            }
            Err(e) => {
                self.update_stats(StatsEvent::RequestsFailed, 1);
                Err(e)
            }
        }
    }

    /// Connects every node concurrently. Results are in node order.
    pub async fn connect_all(&self) -> Vec<Result<(), ClusterError>> {
        join_all(self.nodes.iter().map(|node| async move {
            if node.state() == NodeState::Ready {
                return Ok(());
            }
            node.connect().await
        }))
        .await
    }

    pub async fn close_all(&self) {
        join_all(self.nodes.iter().map(|node| node.close())).await;
        info!("[CLUSTER] All nodes closed");
    }
}
