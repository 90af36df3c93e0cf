use serde::{Deserialize, Serialize};

/// Which node(s) an API call is sent to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NodeTarget {
    /// First reachable node, failing over in configuration order.
    #[default]
    Any,
    /// Every configured node; the call succeeds only if all of them answer.
    All,
    /// Node advertised under this name in its ready frame.
    Name(String),
    /// Node at this position of the configured node list.
    Index(usize),
}
