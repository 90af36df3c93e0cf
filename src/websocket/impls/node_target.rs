use crate::websocket::enums::node_target::NodeTarget;

impl NodeTarget {
    pub fn is_pinned(&self) -> bool {
        matches!(self, NodeTarget::Name(_) | NodeTarget::Index(_))
    }
}

impl From<&str> for NodeTarget {
    fn from(value: &str) -> Self {
        match value {
            "" | "any" => NodeTarget::Any,
            "*" | "all" => NodeTarget::All,
            name => NodeTarget::Name(name.to_string()),
        }
    }
}

impl std::fmt::Display for NodeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeTarget::Any => write!(f, "any"),
            NodeTarget::All => write!(f, "all"),
            NodeTarget::Name(name) => write!(f, "{}", name),
            NodeTarget::Index(index) => write!(f, "#{}", index),
        }
    }
}
