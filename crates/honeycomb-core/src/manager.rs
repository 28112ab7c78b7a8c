use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::codec::{
    self, GraphDetail, GraphRecord, GraphView, HoneycombSummary, ImportError, ImportReport, IndexRecord,
    ViewBuilder,
};
use crate::config::{
    Config, DEFAULT_CONNECTION_KIND, DEFAULT_CONNECTION_TITLE, DEFAULT_NEW_NODE_BASE, DEFAULT_NEW_NODE_TITLE,
};
use crate::model::{AddOutcome, BeeHive, Graph, Honeycomb, Node};
use crate::seed;
use crate::storage::{Storage, StorageError};

/// Changes to a graph node from the node editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeUpdate {
    pub title: Option<String>,
    pub contents: Option<String>,
    /// Name of a node to connect this node to.
    pub connect_to: Option<String>,
}

/// Changes to a honeycomb cell. Fields the cell kind lacks are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellUpdate {
    pub title: Option<String>,
    pub contents: Option<String>,
    pub href: Option<String>,
    pub icon: Option<String>,
}

/// Manages the hive and its persistence.
///
/// Provides a high-level API over the content tree; every mutation is
/// saved to the store before it returns.
pub struct HiveManager<S: Storage> {
    storage: S,
    key: String,
    hive: BeeHive,
    max_import_bytes: usize,
    views: ViewBuilder,
}

impl<S: Storage> HiveManager<S> {
    /// Loads the hive from the store, seeding and saving it on first use.
    pub fn open(storage: S, config: &Config) -> Result<Self, ManagerError> {
        let key = config.storage.root_key.clone();
        let hive = if storage.hive_exists(&key)? {
            let hive = storage.load_hive(&key)?;
            info!(key = %key, children = hive.len(), "loaded hive");
            hive
        } else {
            let hive = seed::default_hive();
            storage.save_hive(&key, &hive)?;
            hive
        };

        Ok(Self {
            storage,
            key,
            hive,
            max_import_bytes: config.import.max_bytes,
            views: ViewBuilder::new(config.server.base_url.clone(), config.layout),
        })
    }

    pub fn hive(&self) -> &BeeHive {
        &self.hive
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists the current hive.
    pub fn save(&self) -> Result<(), ManagerError> {
        self.storage.save_hive(&self.key, &self.hive)?;
        Ok(())
    }

    fn graph(&self, name: &str) -> Result<&Graph, ManagerError> {
        self.hive.graph(name).ok_or_else(|| ManagerError::not_found("graph", name))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut Graph, ManagerError> {
        self.hive
            .graph_mut(name)
            .ok_or_else(|| ManagerError::not_found("graph", name))
    }

    fn honeycomb(&self, name: &str) -> Result<&Honeycomb, ManagerError> {
        self.hive
            .honeycomb(name)
            .ok_or_else(|| ManagerError::not_found("honeycomb", name))
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Lists the hive's children.
    pub fn list_honeycombs(&self) -> Vec<HoneycombSummary> {
        self.hive.values().map(HoneycombSummary::from).collect()
    }

    pub fn honeycomb_view(&self, name: &str) -> Result<GraphView, ManagerError> {
        Ok(self.views.honeycomb(self.honeycomb(name)?))
    }

    pub fn graph_record(&self, name: &str) -> Result<GraphRecord, ManagerError> {
        Ok(self.graph(name)?.to_record())
    }

    pub fn graph_view(&self, name: &str) -> Result<GraphView, ManagerError> {
        Ok(self.views.graph(self.graph(name)?))
    }

    pub fn graph_detail(&self, name: &str) -> Result<GraphDetail, ManagerError> {
        Ok(self.views.graph_detail(self.graph(name)?))
    }

    pub fn index_record(&self) -> IndexRecord {
        self.hive.index().to_record()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replaces a graph's content with an uploaded document.
    pub fn import_graph(
        &mut self,
        graph: &str,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> Result<ImportReport, ManagerError> {
        let max_bytes = self.max_import_bytes;
        let report = codec::import_bytes(self.graph_mut(graph)?, bytes, content_type, max_bytes)?;
        self.hive.reindex_graph(graph);
        self.save()?;
        Ok(report)
    }

    /// Adds an empty text node with the first free `new-node-N` name.
    pub fn create_node(&mut self, graph: &str) -> Result<String, ManagerError> {
        let target = self.graph_mut(graph)?;
        let name = target.unique_node_name(DEFAULT_NEW_NODE_BASE);
        let _ = target.add_node(Node::text(name.clone(), DEFAULT_NEW_NODE_TITLE, ""));
        self.hive.reindex_graph(graph);
        self.save()?;
        Ok(name)
    }

    /// Edits a graph node and optionally connects it to another node.
    ///
    /// Returns the outcome of the connection, if one was requested.
    pub fn update_node(
        &mut self,
        graph: &str,
        node: &str,
        update: NodeUpdate,
    ) -> Result<Option<AddOutcome>, ManagerError> {
        let target = self.graph_mut(graph)?;
        let cell = target
            .node_mut(node)
            .ok_or_else(|| ManagerError::not_found("node", node))?;

        if let Some(title) = update.title {
            cell.set_title(title);
        }
        if let Some(contents) = update.contents {
            let _ = cell.set_contents(contents);
        }

        let connection = update
            .connect_to
            .filter(|to| !to.is_empty())
            .map(|to| target.connect(node, &to, DEFAULT_CONNECTION_TITLE, DEFAULT_CONNECTION_KIND));

        self.hive.reindex_graph(graph);
        self.save()?;
        Ok(connection)
    }

    /// Removes a node from a graph, optionally scrubbing its edges.
    ///
    /// Returns the number of edges removed with it.
    pub fn remove_graph_node(&mut self, graph: &str, node: &str, cascade: bool) -> Result<usize, ManagerError> {
        let target = self.graph_mut(graph)?;
        let id = target
            .get_node_by_name(node)
            .map(Node::id)
            .ok_or_else(|| ManagerError::not_found("node", node))?;

        let scrubbed = if cascade {
            target.del_node_cascade(id).unwrap_or(0)
        } else {
            let _ = target.del_node(id);
            0
        };

        self.hive.reindex_graph(graph);
        self.save()?;
        Ok(scrubbed)
    }

    /// Edits a honeycomb cell.
    pub fn update_cell(&mut self, honeycomb: &str, cell: &str, update: CellUpdate) -> Result<(), ManagerError> {
        let target = self
            .hive
            .honeycomb_mut(honeycomb)
            .ok_or_else(|| ManagerError::not_found("honeycomb", honeycomb))?
            .cell_mut(cell)
            .ok_or_else(|| ManagerError::not_found("cell", cell))?;

        if let Some(title) = update.title {
            target.set_title(title);
        }
        if let Some(contents) = update.contents {
            let _ = target.set_contents(contents);
        }
        if let Some(href) = update.href {
            let _ = target.set_href(href);
        }
        if let Some(icon) = update.icon {
            target.set_icon(Some(icon));
        }

        if self.hive.index().contains_node(cell) {
            let _ = self.hive.index_cell(honeycomb, cell);
        }
        self.save()
    }

    /// Replaces a honeycomb's map with an uploaded image.
    ///
    /// Returns the file name of the replaced map so the caller can delete it.
    pub fn set_honeycomb_map(
        &mut self,
        honeycomb: &str,
        href: &str,
        filename: Option<String>,
    ) -> Result<Option<String>, ManagerError> {
        let target = self
            .hive
            .honeycomb_mut(honeycomb)
            .ok_or_else(|| ManagerError::not_found("honeycomb", honeycomb))?;

        let previous = target.set_map(Node::static_map(href, filename));
        self.save()?;
        Ok(previous.and_then(|map| map.filename().map(str::to_string)))
    }

    /// Removes a hive child and everything the index holds for it.
    pub fn remove(&mut self, name: &str) -> Result<(), ManagerError> {
        if !self.hive.remove(name).is_removed() {
            return Err(ManagerError::not_found("child", name));
        }
        self.save()
    }
}

/// Errors that can occur in HiveManager operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl ManagerError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        ManagerError::NotFound {
            kind,
            name: name.into(),
        }
    }
}
