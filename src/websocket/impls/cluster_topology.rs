use crate::websocket::enums::node_state::NodeState;
use crate::websocket::structs::cluster_topology::ClusterTopology;
use crate::websocket::structs::node_info::NodeInfo;
use crate::websocket::structs::node_state_change::NodeStateChange;

impl ClusterTopology {
    pub fn new(descriptors: &[String]) -> ClusterTopology {
        let mut topology = ClusterTopology::default();
        topology.ensure_nodes(descriptors);
        topology
    }

    /// Sizes every array to the node list; known identities are kept.
    pub fn ensure_nodes(&mut self, descriptors: &[String]) {
        let count = descriptors.len();
        self.descriptors = descriptors.to_vec();
        self.names.resize(count, None);
        self.versions.resize(count, None);
        self.modules.resize(count, Vec::new());
        self.states.resize(count, NodeState::Disconnected);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn index_of_descriptor(&self, descriptor: &str) -> Option<usize> {
        self.descriptors.iter().position(|known| known == descriptor)
    }

    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|known| known.as_deref() == Some(name))
    }

    /// Records a state change for node `index`. Returns the previous state
    /// and the updated row, or `None` when the index is out of range.
    pub fn apply(&mut self, index: usize, change: &NodeStateChange) -> Option<(NodeState, NodeInfo)> {
        if index >= self.len() {
            return None;
        }
        let previous = self.states[index];
        self.states[index] = change.state;
        if change.name.is_some() {
            self.names[index] = change.name.clone();
        }
        if change.version.is_some() {
            self.versions[index] = change.version.clone();
        }
        if !change.modules.is_empty() {
            self.modules[index] = change.modules.clone();
        }
        self.node(index).map(|info| (previous, info))
    }

    pub fn node(&self, index: usize) -> Option<NodeInfo> {
        Some(NodeInfo {
            descriptor: self.descriptors.get(index)?.clone(),
            name: self.names.get(index)?.clone(),
            version: self.versions.get(index)?.clone(),
            modules: self.modules.get(index)?.clone(),
            state: *self.states.get(index)?,
        })
    }

    pub fn nodes(&self) -> Vec<NodeInfo> {
        (0..self.len()).filter_map(|index| self.node(index)).collect()
    }

    /// First module of `required` that node `index` is known to lack. A node
    /// that has not advertised its modules yet lacks nothing.
    pub fn missing_module<'a>(&self, index: usize, required: &'a [String]) -> Option<&'a str> {
        let known = self.modules.get(index)?;
        if known.is_empty() {
            return None;
        }
        required
            .iter()
            .find(|module| !known.contains(module))
            .map(String::as_str)
    }

    pub fn ready_count(&self) -> usize {
        self.states.iter().filter(|state| state.is_ready()).count()
    }
}
