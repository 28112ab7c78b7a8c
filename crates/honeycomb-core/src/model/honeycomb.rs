//! Named collections of content cells.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::{AddOutcome, Node, RemoveOutcome};

/// A named collection of cells with one associated map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Honeycomb {
    id: Uuid,
    name: String,
    title: String,
    icon: Option<String>,
    map: Option<Node>,
    #[serde(default)]
    cells: Vec<Node>,
}

impl Honeycomb {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            title: title.into(),
            icon: None,
            map: None,
            cells: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
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

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn map(&self) -> Option<&Node> {
        self.map.as_ref()
    }

    /// Replace the map, returning the previous one.
    pub fn set_map(&mut self, mut map: Node) -> Option<Node> {
        map.set_parent(self.id);
        self.map.replace(map)
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> &[Node] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cell(name).is_some()
    }

    pub fn cell(&self, name: &str) -> Option<&Node> {
        self.cells.iter().find(|c| c.key() == name)
    }

    pub fn cell_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.cells.iter_mut().find(|c| c.key() == name)
    }

    /// Add a cell keyed by its name; an existing key is left untouched.
    pub fn add_cell(&mut self, mut cell: Node) -> AddOutcome {
        let key = cell.key();
        if self.contains(&key) {
            debug!(honeycomb = %self.name, cell = %key, "duplicate cell name, ignored");
            return AddOutcome::Duplicate;
        }
        cell.set_parent(self.id);
        cell.ensure_name();
        self.cells.push(cell);
        AddOutcome::Applied
    }

    pub fn remove_cell(&mut self, name: &str) -> RemoveOutcome {
        match self.cells.iter().position(|c| c.key() == name) {
            Some(pos) => {
                self.cells.remove(pos);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }
}
