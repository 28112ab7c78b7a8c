//! Directed, labeled relations between nodes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Node;
use crate::codec::EdgeRecord;

/// Non-owning handle to an edge endpoint.
///
/// Captures the node's id and its collection key at the time the edge
/// was built; membership checks go through `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: Uuid,
    pub name: String,
}

impl From<&Node> for NodeRef {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id(),
            name: node.key(),
        }
    }
}

/// A directed relation between two nodes of the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    name: String,
    title: String,
    from: NodeRef,
    to: NodeRef,
    kind: String,
    /// Id of the owning graph, set once the edge is admitted.
    #[serde(default)]
    parent: Option<Uuid>,
}

impl Edge {
    /// Create an edge between two nodes. A blank name is replaced by a fresh UUID.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        from: &Node,
        to: &Node,
        kind: impl Into<String>,
    ) -> Self {
        Self::between(name, title, NodeRef::from(from), NodeRef::from(to), kind)
    }

    /// Create an edge from endpoint handles.
    pub fn between(
        name: impl Into<String>,
        title: impl Into<String>,
        from: NodeRef,
        to: NodeRef,
        kind: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let name = if name.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            name
        };
        Self {
            name,
            title: title.into(),
            from,
            to,
            kind: kind.into(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn from(&self) -> &NodeRef {
        &self.from
    }

    pub fn to(&self) -> &NodeRef {
        &self.to
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn parent(&self) -> Option<Uuid> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Uuid) {
        self.parent = Some(parent);
    }

    /// Returns true if either endpoint has the given key.
    pub fn touches(&self, key: &str) -> bool {
        self.from.name == key || self.to.name == key
    }

    pub fn to_record(&self) -> EdgeRecord {
        EdgeRecord {
            source: self.from.name.clone(),
            target: self.to.name.clone(),
            label: self.title.clone(),
            kind: self.kind.clone(),
        }
    }
}
