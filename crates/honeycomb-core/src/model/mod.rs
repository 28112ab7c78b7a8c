//! In-memory content model.
//!
//! The tree is rooted at a [`BeeHive`], whose children are either
//! [`Honeycomb`]s (named collections of cells) or [`Graph`]s (ordered
//! node/edge diagrams). Every content-bearing vertex is a [`Node`] whose
//! payload is one of the closed set of [`NodeKind`]s.
//!
//! Mutations never fail. Operations that may be ignored report what
//! happened through [`AddOutcome`] and [`RemoveOutcome`] instead.

mod edge;
mod graph;
mod hive;
mod honeycomb;
mod node;

pub use edge::{Edge, NodeRef};
pub use graph::Graph;
pub use hive::{BeeHive, HiveChild};
pub use honeycomb::Honeycomb;
pub use node::{Node, NodeKind};

/// Result of an insertion into a collection.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was stored.
    Applied,
    /// An item with the same key already exists; nothing changed.
    Duplicate,
    /// The item references something that is not a member; nothing changed.
    InvalidReference,
}

impl AddOutcome {
    /// Returns true if the item was stored.
    pub fn is_applied(self) -> bool {
        self == AddOutcome::Applied
    }
}

/// Result of a removal from a collection.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl RemoveOutcome {
    /// Returns true if something was removed.
    pub fn is_removed(self) -> bool {
        self == RemoveOutcome::Removed
    }
}

/// Normalizes an optional externally-visible name: blank names count as absent.
pub(crate) fn normalize_name(name: impl Into<String>) -> Option<String> {
    let name = name.into();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
