//! HTTP route handlers.
//!
//! Handlers are kept thin: they take the lock, call one manager
//! operation and wrap the result.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use honeycomb_core::codec::{GraphDetail, HoneycombSummary};
use honeycomb_core::{CellUpdate, GraphView, NodeUpdate};

use super::error::ApiError;
use super::models::{
    outcome_label, CreatedNode, ExportQuery, ImportResponse, MapReplaced, MapUpdate, RemoveQuery, RemovedNode,
    UpdatedNode,
};
use super::AppState;

// =============================================================================
// Honeycomb API
// =============================================================================

/// GET `/api/v1/honeycombs` - Every hive child with its title and icon.
pub async fn list_honeycombs(State(state): State<Arc<AppState>>) -> Json<Vec<HoneycombSummary>> {
    let manager = state.manager.read().await;
    Json(manager.list_honeycombs())
}

/// GET `/api/v1/honeycombs/{name}` - Radial view of one honeycomb.
pub async fn honeycomb_view(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<GraphView>, ApiError> {
    let manager = state.manager.read().await;
    Ok(Json(manager.honeycomb_view(&name)?))
}

/// POST `/api/v1/honeycombs/{name}/cells/{cell}` - Edit a cell.
pub async fn update_cell(
    State(state): State<Arc<AppState>>,
    Path((name, cell)): Path<(String, String)>,
    Json(update): Json<CellUpdate>,
) -> Result<StatusCode, ApiError> {
    let mut manager = state.manager.write().await;
    manager.update_cell(&name, &cell, update)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT `/api/v1/honeycombs/{name}/map` - Point the honeycomb map at an uploaded image.
pub async fn set_map(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(update): Json<MapUpdate>,
) -> Result<Json<MapReplaced>, ApiError> {
    let mut manager = state.manager.write().await;
    let previous_filename = manager.set_honeycomb_map(&name, &update.href, update.filename)?;
    Ok(Json(MapReplaced {
        honeycomb: name,
        previous_filename,
    }))
}

/// DELETE `/api/v1/honeycombs/{name}` and `/graphs/{name}` - Remove a hive child.
pub async fn remove_child(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut manager = state.manager.write().await;
    manager.remove(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Graph API
// =============================================================================

/// GET `/graphs/{name}` - Nodes with URLs and edges with endpoint titles.
pub async fn graph_detail(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<GraphDetail>, ApiError> {
    let manager = state.manager.read().await;
    Ok(Json(manager.graph_detail(&name)?))
}

/// GET `/graphs/{name}/json` - Flat export, or the id-indexed view with `?indexed=true`.
pub async fn graph_json(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let manager = state.manager.read().await;
    let response = if query.indexed {
        Json(manager.graph_view(&name)?).into_response()
    } else {
        Json(manager.graph_record(&name)?).into_response()
    };
    Ok(response)
}

/// POST `/graphs/{name}/import` - Replace the graph with the uploaded document.
///
/// The body is the raw document; its `Content-Type` must be a JSON type,
/// `application/octet-stream`, or absent.
pub async fn import_graph(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ImportResponse>, ApiError> {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let mut manager = state.manager.write().await;
    let report = manager.import_graph(&name, &body, content_type)?;
    Ok(Json(ImportResponse::new(name, report)))
}

/// POST `/graphs/{name}/nodes` - Add an empty text node.
pub async fn create_node(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<CreatedNode>), ApiError> {
    let mut manager = state.manager.write().await;
    let node = manager.create_node(&name)?;
    Ok((StatusCode::CREATED, Json(CreatedNode { graph: name, node })))
}

/// POST `/graphs/{name}/nodes/{node}` - Edit a node, optionally connecting it.
pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path((name, node)): Path<(String, String)>,
    Json(update): Json<NodeUpdate>,
) -> Result<Json<UpdatedNode>, ApiError> {
    let mut manager = state.manager.write().await;
    let connection = manager.update_node(&name, &node, update)?;
    Ok(Json(UpdatedNode {
        graph: name,
        node,
        connection: connection.map(outcome_label),
    }))
}

/// DELETE `/graphs/{name}/nodes/{node}` - Remove a node; `?cascade=true` also drops its edges.
pub async fn remove_node(
    State(state): State<Arc<AppState>>,
    Path((name, node)): Path<(String, String)>,
    Query(query): Query<RemoveQuery>,
) -> Result<Json<RemovedNode>, ApiError> {
    let mut manager = state.manager.write().await;
    let edges_removed = manager.remove_graph_node(&name, &node, query.cascade)?;
    Ok(Json(RemovedNode {
        graph: name,
        node,
        edges_removed,
    }))
}
