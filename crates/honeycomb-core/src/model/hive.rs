//! The hive root: a keyed collection of honeycombs and graphs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AddOutcome, Edge, Graph, Honeycomb, Node, RemoveOutcome};
use crate::config::DEFAULT_HIVE_TITLE;
use crate::index::{HiveIndex, IndexEntry};

/// A direct child of the hive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HiveChild {
    Honeycomb(Honeycomb),
    Graph(Graph),
}

impl HiveChild {
    pub fn key(&self) -> String {
        match self {
            HiveChild::Honeycomb(hc) => hc.name().to_string(),
            HiveChild::Graph(graph) => graph.key(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            HiveChild::Honeycomb(hc) => hc.title(),
            HiveChild::Graph(graph) => graph.title(),
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            HiveChild::Honeycomb(hc) => hc.icon(),
            HiveChild::Graph(_) => None,
        }
    }
}

impl From<Honeycomb> for HiveChild {
    fn from(hc: Honeycomb) -> Self {
        HiveChild::Honeycomb(hc)
    }
}

impl From<Graph> for HiveChild {
    fn from(graph: Graph) -> Self {
        HiveChild::Graph(graph)
    }
}

/// Root of the content tree.
///
/// Owns its direct children exclusively and an auxiliary [`HiveIndex`].
/// The index is only changed through the methods on this type; callers
/// get read-only access via [`BeeHive::index`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeeHive {
    name: Option<String>,
    title: String,
    icon: Option<String>,
    #[serde(default)]
    children: Vec<HiveChild>,
    #[serde(default)]
    index: HiveIndex,
}

impl Default for BeeHive {
    fn default() -> Self {
        Self::new()
    }
}

impl BeeHive {
    pub fn new() -> Self {
        Self {
            name: None,
            title: DEFAULT_HIVE_TITLE.to_string(),
            icon: None,
            children: Vec::new(),
            index: HiveIndex::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>, title: impl Into<String>) {
        self.name = super::normalize_name(name);
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    // ------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------

    /// Add a child under its key; an existing key is left untouched.
    pub fn insert(&mut self, child: impl Into<HiveChild>) -> AddOutcome {
        let child = child.into();
        let key = child.key();
        if self.contains(&key) {
            debug!(child = %key, "duplicate hive child, ignored");
            return AddOutcome::Duplicate;
        }
        self.children.push(child);
        AddOutcome::Applied
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&HiveChild> {
        self.children.iter().find(|c| c.key() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut HiveChild> {
        self.children.iter_mut().find(|c| c.key() == name)
    }

    pub fn graph(&self, name: &str) -> Option<&Graph> {
        match self.get(name) {
            Some(HiveChild::Graph(graph)) => Some(graph),
            _ => None,
        }
    }

    pub fn graph_mut(&mut self, name: &str) -> Option<&mut Graph> {
        match self.get_mut(name) {
            Some(HiveChild::Graph(graph)) => Some(graph),
            _ => None,
        }
    }

    pub fn honeycomb(&self, name: &str) -> Option<&Honeycomb> {
        match self.get(name) {
            Some(HiveChild::Honeycomb(hc)) => Some(hc),
            _ => None,
        }
    }

    pub fn honeycomb_mut(&mut self, name: &str) -> Option<&mut Honeycomb> {
        match self.get_mut(name) {
            Some(HiveChild::Honeycomb(hc)) => Some(hc),
            _ => None,
        }
    }

    /// Child keys in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.children.iter().map(HiveChild::key).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &HiveChild> {
        self.children.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = (String, &HiveChild)> {
        self.children.iter().map(|c| (c.key(), c))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Remove a child and cascade through the index.
    ///
    /// A removed graph takes its current members out of the index, even
    /// if the indexed snapshot is older than the graph; a removed
    /// honeycomb takes its cells and its map.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let Some(pos) = self.children.iter().position(|c| c.key() == name) else {
            return RemoveOutcome::NotFound;
        };
        let members: Vec<String> = match self.children.remove(pos) {
            HiveChild::Graph(graph) => graph.nodes().iter().map(Node::key).collect(),
            HiveChild::Honeycomb(hc) => hc.cells().iter().chain(hc.map()).map(Node::key).collect(),
        };
        for member in &members {
            let _ = self.index.remove_node(member);
        }
        let _ = self.index.remove_node_recursively(name);
        RemoveOutcome::Removed
    }

    // ------------------------------------------------------------------
    // Auxiliary index
    // ------------------------------------------------------------------

    /// Read-only view of the auxiliary index.
    pub fn index(&self) -> &HiveIndex {
        &self.index
    }

    /// Register a node or graph snapshot in the index. Returns its key.
    pub fn add_node(&mut self, entry: impl Into<IndexEntry>) -> String {
        self.index.add_node(entry)
    }

    pub fn add_edge(&mut self, source: &str, edge: Edge) {
        self.index.add_edge(source, edge)
    }

    pub fn remove_node(&mut self, key: &str) -> RemoveOutcome {
        self.index.remove_node(key)
    }

    pub fn remove_node_recursively(&mut self, key: &str) -> RemoveOutcome {
        self.index.remove_node_recursively(key)
    }

    pub fn sync_graph_edges(&mut self, graph: &Graph) {
        self.index.sync_graph_edges(graph)
    }

    /// Register a graph and index its edges in one step.
    pub fn add_graph(&mut self, graph: &Graph) -> String {
        self.index.sync_graph_edges(graph);
        self.index.add_node(graph.clone())
    }

    /// Resync the edge bucket of the child graph `name`.
    pub fn sync_graph(&mut self, name: &str) -> bool {
        let Some(graph) = self.children.iter().find_map(|c| match c {
            HiveChild::Graph(g) if g.key() == name => Some(g),
            _ => None,
        }) else {
            return false;
        };
        self.index.sync_graph_edges(graph);
        true
    }

    /// Refresh both the snapshot and the edge bucket of the child graph `name`.
    pub fn reindex_graph(&mut self, name: &str) -> bool {
        let Some(graph) = self.graph(name).cloned() else {
            return false;
        };
        self.add_graph(&graph);
        true
    }

    /// Register a cell snapshot from a child honeycomb.
    pub fn index_cell(&mut self, honeycomb: &str, cell: &str) -> Option<String> {
        let node: Node = self.honeycomb(honeycomb)?.cell(cell)?.clone();
        Some(self.index.add_node(node))
    }
}
