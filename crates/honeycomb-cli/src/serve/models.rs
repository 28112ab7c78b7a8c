//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use honeycomb_core::{AddOutcome, ImportReport};

/// Query of `GET /graphs/{name}/json`.
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// Id-indexed view instead of flat arrays.
    #[serde(default)]
    pub indexed: bool,
}

/// Response of `POST /graphs/{name}/import`.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub graph: String,
    pub message: String,
    #[serde(flatten)]
    pub report: ImportReport,
}

impl ImportResponse {
    pub fn new(graph: String, report: ImportReport) -> Self {
        Self {
            message: format!("Imported {} nodes and {} edges", report.nodes, report.edges),
            graph,
            report,
        }
    }
}

/// Response of `POST /graphs/{name}/nodes`.
#[derive(Debug, Serialize)]
pub struct CreatedNode {
    pub graph: String,
    pub node: String,
}

/// Response of `POST /graphs/{name}/nodes/{node}`.
#[derive(Debug, Serialize)]
pub struct UpdatedNode {
    pub graph: String,
    pub node: String,
    /// Result of the requested connection, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<&'static str>,
}

pub fn outcome_label(outcome: AddOutcome) -> &'static str {
    match outcome {
        AddOutcome::Applied => "applied",
        AddOutcome::Duplicate => "duplicate",
        AddOutcome::InvalidReference => "invalid_reference",
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Query of `DELETE /graphs/{name}/nodes/{node}`.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveQuery {
    /// Also remove the edges touching the node.
    #[serde(default)]
    pub cascade: bool,
}

/// Response of `DELETE /graphs/{name}/nodes/{node}`.
#[derive(Debug, Serialize)]
pub struct RemovedNode {
    pub graph: String,
    pub node: String,
    pub edges_removed: usize,
}

/// Body of `PUT /api/v1/honeycombs/{name}/map`.
#[derive(Debug, Deserialize)]
pub struct MapUpdate {
    pub href: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Response of `PUT /api/v1/honeycombs/{name}/map`.
#[derive(Debug, Serialize)]
pub struct MapReplaced {
    pub honeycomb: String,
    /// Upload that the new map replaced, for the caller to delete.
    pub previous_filename: Option<String>,
}
