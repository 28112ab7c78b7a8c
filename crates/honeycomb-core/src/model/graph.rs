//! Ordered node/edge diagrams.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{normalize_name, AddOutcome, Edge, Node, NodeRef, RemoveOutcome};
use crate::codec::GraphRecord;

/// An ordered collection of nodes and the edges between them.
///
/// Node and edge order is insertion order and is visible to callers:
/// exported views lay nodes out in this order. Edges may only be
/// admitted through [`Graph::add_edge`] when both endpoints are members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    id: Uuid,
    name: Option<String>,
    title: String,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph. A blank name counts as absent.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: normalize_name(name),
            title: title.into(),
            collapsed: false,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Collection key: the name if present, otherwise the id.
    pub fn key(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Raw access to the edge sequence.
    ///
    /// Bypasses the membership check of [`Graph::add_edge`]. Use
    /// [`Graph::validate`] to find dangling edges afterwards, and
    /// resync any index holding this graph's edges.
    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_names(&self) -> HashSet<String> {
        self.nodes.iter().map(Node::key).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_node_by_name(name).is_some()
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.key() == name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.key() == name)
    }

    /// Node at a position in insertion order.
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Append a node unless one with the same name is already present.
    ///
    /// The node is re-parented to this graph and, if unnamed, its id
    /// becomes its visible name.
    pub fn add_node(&mut self, mut node: Node) -> AddOutcome {
        let key = node.key();
        if self.contains(&key) {
            debug!(graph = %self.key(), node = %key, "duplicate node name, ignored");
            return AddOutcome::Duplicate;
        }
        node.set_parent(self.id);
        node.ensure_name();
        self.nodes.push(node);
        AddOutcome::Applied
    }

    /// Remove a node by identity. Edges touching it are left in place.
    pub fn del_node(&mut self, id: Uuid) -> RemoveOutcome {
        match self.nodes.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.nodes.remove(pos);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Remove a node by identity together with every edge touching it.
    ///
    /// Returns the number of edges scrubbed, or `None` if the node is not a member.
    pub fn del_node_cascade(&mut self, id: Uuid) -> Option<usize> {
        let pos = self.nodes.iter().position(|n| n.id() == id)?;
        let key = self.nodes.remove(pos).key();
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(&key));
        Some(before - self.edges.len())
    }

    /// Append an edge if both endpoints are current members.
    pub fn add_edge(&mut self, mut edge: Edge) -> AddOutcome {
        let names = self.node_names();
        if !names.contains(&edge.from().name) || !names.contains(&edge.to().name) {
            debug!(
                graph = %self.key(),
                edge = %edge.name(),
                from = %edge.from().name,
                to = %edge.to().name,
                "edge endpoint is not a member, ignored"
            );
            return AddOutcome::InvalidReference;
        }
        edge.set_parent(self.id);
        self.edges.push(edge);
        AddOutcome::Applied
    }

    /// Remove the first edge equal to `edge`.
    pub fn del_edge(&mut self, edge: &Edge) -> RemoveOutcome {
        match self.edges.iter().position(|e| e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Connect two members with an edge named `<from>-<to>`.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        title: impl Into<String>,
        kind: impl Into<String>,
    ) -> AddOutcome {
        let (Some(source), Some(target)) = (self.get_node_by_name(from), self.get_node_by_name(to)) else {
            debug!(graph = %self.key(), from, to, "connect references a missing node, ignored");
            return AddOutcome::InvalidReference;
        };
        let edge = Edge::between(
            format!("{}-{}", from, to),
            title,
            NodeRef::from(source),
            NodeRef::from(target),
            kind,
        );
        self.add_edge(edge)
    }

    /// First free name of the form `<base>-1`, `<base>-2`, ...
    pub fn unique_node_name(&self, base: &str) -> String {
        (1..)
            .map(|i| format!("{}-{}", base, i))
            .find(|candidate| !self.contains(candidate))
            .unwrap_or_else(|| format!("{}-{}", base, Uuid::new_v4()))
    }

    /// Drop every node and edge.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Edges whose endpoints are no longer members.
    pub fn validate(&self) -> Vec<&Edge> {
        let names = self.node_names();
        self.edges
            .iter()
            .filter(|e| !names.contains(&e.from().name) || !names.contains(&e.to().name))
            .collect()
    }

    /// Flat-array export. Nodes without a flat record are skipped.
    pub fn to_record(&self) -> GraphRecord {
        GraphRecord {
            name: self.name.clone(),
            title: self.title.clone(),
            nodes: self.nodes.iter().filter_map(Node::to_record).collect(),
            edges: self.edges.iter().map(Edge::to_record).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> Graph {
        let mut graph = Graph::new("g", "G");
        assert!(graph.add_node(Node::text("a", "A", "")).is_applied());
        assert!(graph.add_node(Node::text("b", "B", "")).is_applied());
        graph
    }

    #[test]
    fn test_add_node_sets_parent() {
        let graph = two_node_graph();
        assert!(graph.nodes().iter().all(|n| n.parent() == Some(graph.id())));
    }

    #[test]
    fn test_unnamed_node_gets_id_as_name() {
        let mut graph = Graph::new("g", "");
        let node = Node::text("", "", "");
        let id = node.id();
        assert!(graph.add_node(node).is_applied());
        assert_eq!(graph.nodes()[0].name(), Some(id.to_string().as_str()));
    }

    #[test]
    fn test_connect_names_edge_after_endpoints() {
        let mut graph = two_node_graph();
        assert!(graph.connect("a", "b", "rel", "link").is_applied());
        assert_eq!(graph.edges()[0].name(), "a-b");
        assert_eq!(graph.connect("a", "zz", "rel", "link"), AddOutcome::InvalidReference);
    }

    #[test]
    fn test_unique_node_name_skips_taken() {
        let mut graph = Graph::new("g", "");
        assert_eq!(graph.unique_node_name("new-node"), "new-node-1");
        let _ = graph.add_node(Node::text("new-node-1", "", ""));
        assert_eq!(graph.unique_node_name("new-node"), "new-node-2");
    }

    #[test]
    fn test_del_edge_by_identity() {
        let mut graph = two_node_graph();
        let _ = graph.connect("a", "b", "x", "");
        let edge = graph.edges()[0].clone();
        assert!(graph.del_edge(&edge).is_removed());
        assert_eq!(graph.del_edge(&edge), RemoveOutcome::NotFound);
    }
}
