//! Graph import from `{nodes: [...], edges: [...]}` documents.
//!
//! Import has replace semantics and is atomic: the whole document is
//! validated first, and the target graph is only cleared and rebuilt
//! once validation has passed. A failed import leaves the graph as it was.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::{ImportError, ValidationError};
use crate::model::{Edge, Graph, Node};

/// Content types accepted for uploaded documents.
pub const ACCEPTED_CONTENT_TYPES: &[&str] = &["application/json", "text/json", "application/octet-stream"];

/// Counts of what an import applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub nodes: usize,
    pub edges: usize,
    /// Edges dropped because an endpoint is not among the imported nodes.
    pub skipped_edges: usize,
}

struct NodeEntry {
    id: String,
    title: String,
    content: String,
}

struct EdgeEntry {
    source: String,
    target: String,
    label: String,
    kind: String,
}

/// Reject payloads by size and content type, then parse them as JSON.
///
/// An empty content type is accepted; parameters such as `; charset=utf-8`
/// are ignored.
pub fn check_payload(bytes: &[u8], content_type: Option<&str>, max_bytes: usize) -> Result<Value, ImportError> {
    if let Some(ctype) = content_type {
        let mime = ctype.split(';').next().unwrap_or("").trim();
        if !mime.is_empty() && !ACCEPTED_CONTENT_TYPES.contains(&mime) {
            return Err(ImportError::UnsupportedContentType(mime.to_string()));
        }
    }
    if bytes.is_empty() {
        return Err(ImportError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(ImportError::TooLarge { limit: max_bytes });
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Check a raw payload and import it into `graph`.
pub fn import_bytes(
    graph: &mut Graph,
    bytes: &[u8],
    content_type: Option<&str>,
    max_bytes: usize,
) -> Result<ImportReport, ImportError> {
    let document = check_payload(bytes, content_type, max_bytes)?;
    Ok(import_graph(graph, &document)?)
}

/// Replace the content of `graph` with the given document.
pub fn import_graph(graph: &mut Graph, document: &Value) -> Result<ImportReport, ValidationError> {
    let root = document.as_object().ok_or(ValidationError::RootNotObject)?;
    let nodes_in = array_field(root, "nodes")?;
    let edges_in = array_field(root, "edges")?;

    let nodes = validate_nodes(nodes_in)?;
    let edges = validate_edges(edges_in)?;

    graph.clear();
    let mut report = ImportReport::default();

    for entry in nodes {
        if graph.add_node(Node::text(entry.id, entry.title, entry.content)).is_applied() {
            report.nodes += 1;
        }
    }

    let mut edge_names = HashSet::new();
    for entry in edges {
        let (Some(from), Some(to)) = (graph.get_node_by_name(&entry.source), graph.get_node_by_name(&entry.target))
        else {
            debug!(source = %entry.source, target = %entry.target, "edge references unknown node, skipped");
            report.skipped_edges += 1;
            continue;
        };

        let base = format!("{}-{}", entry.source, entry.target);
        let mut name = base.clone();
        let mut suffix = 2;
        while edge_names.contains(&name) {
            name = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        edge_names.insert(name.clone());

        let edge = Edge::new(name, entry.label, from, to, entry.kind);
        if graph.add_edge(edge).is_applied() {
            report.edges += 1;
        }
    }

    info!(
        graph = %graph.key(),
        nodes = report.nodes,
        edges = report.edges,
        skipped = report.skipped_edges,
        "imported graph"
    );
    Ok(report)
}

/// A missing key reads as an empty list.
fn array_field<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a [Value], ValidationError> {
    match root.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::NotArrays),
    }
}

fn validate_nodes(items: &[Value]) -> Result<Vec<NodeEntry>, ValidationError> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let index = i + 1;
        let obj = item.as_object().ok_or(ValidationError::NodeNotObject { index })?;
        let id = match obj.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
            _ => return Err(ValidationError::NodeMissingId { index }),
        };
        if !seen.insert(id.clone()) {
            return Err(ValidationError::DuplicateNodeId(id));
        }
        nodes.push(NodeEntry {
            id,
            title: text_field(obj, "title"),
            content: text_field(obj, "content"),
        });
    }

    Ok(nodes)
}

fn validate_edges(items: &[Value]) -> Result<Vec<EdgeEntry>, ValidationError> {
    let mut edges = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let index = i + 1;
        let obj = item.as_object().ok_or(ValidationError::EdgeNotObject { index })?;
        let (Some(Value::String(source)), Some(Value::String(target))) = (obj.get("source"), obj.get("target")) else {
            return Err(ValidationError::EdgeEndpoints { index });
        };
        edges.push(EdgeEntry {
            source: source.clone(),
            target: target.clone(),
            label: text_field(obj, "label"),
            kind: text_field(obj, "kind"),
        });
    }

    Ok(edges)
}

/// Optional text field. Absent, null and other empty values read as "".
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Array(a)) if a.is_empty() => String::new(),
        Some(Value::Object(o)) if o.is_empty() => String::new(),
        Some(other) => other.to_string(),
    }
}
