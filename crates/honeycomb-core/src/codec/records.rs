//! Flat export records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat record of a single node. The shape depends on the node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRecord {
    /// Web content and animation cells.
    Link {
        id: String,
        title: String,
        href: String,
        icon: Option<String>,
    },
    /// Text cells.
    Text {
        id: String,
        title: String,
        content: String,
    },
    /// Icon cells.
    Icon {
        id: String,
        title: String,
        icon: Option<String>,
    },
}

impl NodeRecord {
    pub fn id(&self) -> &str {
        match self {
            NodeRecord::Link { id, .. } | NodeRecord::Text { id, .. } | NodeRecord::Icon { id, .. } => id,
        }
    }
}

/// Flat record of an edge: endpoint names, label and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: String,
}

/// Flat-array export of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub name: Option<String>,
    pub title: String,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Entry of the flat index dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexNodeRecord {
    pub id: String,
    pub title: String,
    pub kind: String,
}

/// Flat dump of the auxiliary index: entries by key, and edge targets per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub nodes: BTreeMap<String, IndexNodeRecord>,
    pub edges: BTreeMap<String, Vec<String>>,
}
