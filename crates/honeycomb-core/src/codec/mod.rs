//! Conversion between the in-memory model and JSON documents.
//!
//! # Wire shapes
//!
//! - [`GraphRecord`] - flat arrays (`nodes[]`, `edges[]`); also the import format
//! - [`GraphView`] - id-indexed nodes with an attribute dict and a layout position
//! - [`GraphDetail`] - per-edge titles and URLs for the graph page
//! - [`IndexRecord`] - flat dump of the hive's auxiliary index

mod error;
mod import;
mod records;
mod view;

pub use error::{ImportError, ValidationError};
pub use import::{check_payload, import_bytes, import_graph, ImportReport, ACCEPTED_CONTENT_TYPES};
pub use records::{EdgeRecord, GraphRecord, IndexNodeRecord, IndexRecord, NodeRecord};
pub use view::{
    DetailEdge, DetailNode, GraphDetail, GraphView, HoneycombSummary, Position, ViewBuilder, ViewEdge,
    ViewNode, ViewNodeData,
};
