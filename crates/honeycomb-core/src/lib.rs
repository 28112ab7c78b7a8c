//! Core library for Honeycomb.
//!
//! A hive of honeycombs and graphs, the auxiliary index kept beside it,
//! the JSON import/export codec, and a file-backed store.

pub mod codec;
pub mod config;
pub mod index;
pub mod manager;
pub mod model;
pub mod seed;
pub mod storage;

pub use codec::{GraphRecord, GraphView, ImportError, ImportReport, ValidationError};
pub use config::{Config, ImportConfig, LayoutConfig, ServerConfig, StorageConfig};
pub use index::{HiveIndex, IndexEntry};
pub use manager::{CellUpdate, HiveManager, ManagerError, NodeUpdate};
pub use model::{AddOutcome, BeeHive, Edge, Graph, HiveChild, Honeycomb, Node, NodeKind, NodeRef, RemoveOutcome};
pub use storage::{FileStorage, Storage, StorageError};
