//! Import error types.

use thiserror::Error;

/// A structurally wrong import document.
///
/// Entry positions are 1-based, as shown to the person who wrote the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("JSON root must be an object")]
    RootNotObject,

    #[error("Invalid structure: 'nodes' and 'edges' must be arrays")]
    NotArrays,

    #[error("Node #{index} is invalid: must be an object")]
    NodeNotObject { index: usize },

    #[error("Node #{index} is invalid: 'id' is required (non-empty string)")]
    NodeMissingId { index: usize },

    #[error("Duplicate node id: '{0}'")]
    DuplicateNodeId(String),

    #[error("Edge #{index} is invalid: must be an object")]
    EdgeNotObject { index: usize },

    #[error("Edge #{index} is invalid: 'source' and 'target' must be strings")]
    EdgeEndpoints { index: usize },
}

/// Errors that can occur while importing a graph document.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Payload is empty")]
    Empty,

    #[error("Payload too large (> {limit} bytes)")]
    TooLarge { limit: usize },

    #[error("Unsupported content type: {0}. Upload a .json file")]
    UnsupportedContentType(String),

    #[error("Failed to parse JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ImportError {
    /// Returns true if the payload was rejected before it was parsed.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            ImportError::Empty | ImportError::TooLarge { .. } | ImportError::UnsupportedContentType(_)
        )
    }
}
