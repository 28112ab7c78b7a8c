//! Auxiliary lookup indices owned by the hive root.
//!
//! Two maps duplicate information reachable by walking the tree:
//!
//! - `nodes_by_id`: collection key -> snapshot of a node or graph
//! - `edges_by_source`: collection key of a graph -> copy of its edges
//!
//! Edge buckets are keyed by the owning graph's key, so removing a key
//! drops both the entry and the bucket. Entries are value snapshots;
//! a graph mutated after registration is reconciled with
//! [`HiveIndex::sync_graph_edges`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::codec::{IndexNodeRecord, IndexRecord};
use crate::model::{Edge, Graph, Node, RemoveOutcome};

/// A node or graph registered in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndexEntry {
    Node(Node),
    Graph(Graph),
}

impl IndexEntry {
    /// Index key: the name if present, otherwise the id.
    pub fn key(&self) -> String {
        match self {
            IndexEntry::Node(node) => node.key(),
            IndexEntry::Graph(graph) => graph.key(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            IndexEntry::Node(node) => node.title(),
            IndexEntry::Graph(graph) => graph.title(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            IndexEntry::Node(node) => node.kind().as_str(),
            IndexEntry::Graph(_) => "graph",
        }
    }

    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            IndexEntry::Graph(graph) => Some(graph),
            IndexEntry::Node(_) => None,
        }
    }
}

impl From<Node> for IndexEntry {
    fn from(node: Node) -> Self {
        IndexEntry::Node(node)
    }
}

impl From<Graph> for IndexEntry {
    fn from(graph: Graph) -> Self {
        IndexEntry::Graph(graph)
    }
}

/// Flat node index plus per-graph edge buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HiveIndex {
    #[serde(default)]
    nodes_by_id: BTreeMap<String, IndexEntry>,
    #[serde(default)]
    edges_by_source: BTreeMap<String, Vec<Edge>>,
}

impl HiveIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node or graph under its key, replacing any previous entry.
    ///
    /// A graph's edges are not indexed here; call
    /// [`HiveIndex::sync_graph_edges`] or [`HiveIndex::add_edge`].
    pub fn add_node(&mut self, entry: impl Into<IndexEntry>) -> String {
        let entry = entry.into();
        let key = entry.key();
        self.nodes_by_id.insert(key.clone(), entry);
        key
    }

    /// Append an edge to the bucket for `source`, creating it if needed.
    pub fn add_edge(&mut self, source: &str, edge: Edge) {
        self.edges_by_source
            .entry(source.to_string())
            .or_default()
            .push(edge);
    }

    /// Drop the entry and the edge bucket stored under `key`.
    pub fn remove_node(&mut self, key: &str) -> RemoveOutcome {
        let node = self.nodes_by_id.remove(key);
        let bucket = self.edges_by_source.remove(key);
        if node.is_some() || bucket.is_some() {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Like [`HiveIndex::remove_node`], but a graph also takes its own
    /// member nodes out of the index. Graphs do not nest, so this goes
    /// one level deep.
    pub fn remove_node_recursively(&mut self, key: &str) -> RemoveOutcome {
        let members: Vec<String> = self
            .nodes_by_id
            .get(key)
            .and_then(IndexEntry::as_graph)
            .map(|graph| graph.nodes().iter().map(Node::key).collect())
            .unwrap_or_default();

        for member in &members {
            let _ = self.remove_node(member);
        }

        let outcome = self.remove_node(key);
        if outcome.is_removed() {
            info!(key, members = members.len(), "removed index entry");
        }
        outcome
    }

    /// Replace the edge bucket for `graph` with a copy of its current edges.
    pub fn sync_graph_edges(&mut self, graph: &Graph) {
        self.edges_by_source
            .insert(graph.key(), graph.edges().to_vec());
    }

    pub fn node(&self, key: &str) -> Option<&IndexEntry> {
        self.nodes_by_id.get(key)
    }

    pub fn edges(&self, key: &str) -> Option<&[Edge]> {
        self.edges_by_source.get(key).map(Vec::as_slice)
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes_by_id.contains_key(key)
    }

    pub fn contains_edges(&self, key: &str) -> bool {
        self.edges_by_source.contains_key(key)
    }

    /// Read-only view of the node index.
    pub fn nodes(&self) -> &BTreeMap<String, IndexEntry> {
        &self.nodes_by_id
    }

    /// Read-only view of the edge buckets.
    pub fn buckets(&self) -> &BTreeMap<String, Vec<Edge>> {
        &self.edges_by_source
    }

    pub fn len(&self) -> usize {
        self.nodes_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes_by_id.is_empty() && self.edges_by_source.is_empty()
    }

    /// Flat export: every indexed entry, and per bucket the edge targets.
    pub fn to_record(&self) -> IndexRecord {
        IndexRecord {
            nodes: self
                .nodes_by_id
                .iter()
                .map(|(key, entry)| {
                    (
                        key.clone(),
                        IndexNodeRecord {
                            id: key.clone(),
                            title: entry.title().to_string(),
                            kind: entry.kind().to_string(),
                        },
                    )
                })
                .collect(),
            edges: self
                .edges_by_source
                .iter()
                .map(|(key, edges)| {
                    (
                        key.clone(),
                        edges.iter().map(|e| e.to().name.clone()).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_bucket() {
        let mut index = HiveIndex::new();
        let a = Node::text("a", "", "");
        let b = Node::text("b", "", "");
        index.add_edge("g", Edge::new("a-b", "x", &a, &b, ""));
        index.add_edge("g", Edge::new("b-a", "y", &b, &a, ""));
        assert_eq!(index.edges("g").map(<[Edge]>::len), Some(2));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut index = HiveIndex::new();
        assert_eq!(index.remove_node("nope"), RemoveOutcome::NotFound);
        assert_eq!(index.remove_node_recursively("nope"), RemoveOutcome::NotFound);
    }

    #[test]
    fn test_remove_node_drops_bucket_with_same_key() {
        let mut index = HiveIndex::new();
        let graph = Graph::new("g", "");
        index.add_node(graph.clone());
        index.sync_graph_edges(&graph);
        assert!(index.contains_edges("g"));
        assert!(index.remove_node("g").is_removed());
        assert!(!index.contains_node("g"));
        assert!(!index.contains_edges("g"));
    }

    #[test]
    fn test_record_lists_edge_targets() {
        let mut index = HiveIndex::new();
        let mut graph = Graph::new("g", "G");
        let _ = graph.add_node(Node::text("a", "A", ""));
        let _ = graph.add_node(Node::text("b", "B", ""));
        let _ = graph.connect("a", "b", "rel", "link");
        index.add_node(graph.clone());
        index.sync_graph_edges(&graph);

        let record = index.to_record();
        assert_eq!(record.nodes["g"].kind, "graph");
        assert_eq!(record.edges["g"], vec!["b".to_string()]);
    }
}
