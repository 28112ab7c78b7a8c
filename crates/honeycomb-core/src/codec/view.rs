//! Id-indexed views for diagram front ends.
//!
//! Nodes carry a key, an attribute dict and a position on a circular
//! layout; positions follow the insertion order of the source collection.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LayoutConfig;
use crate::model::{Graph, HiveChild, Honeycomb, Node};

const THEME_ROOT: &str = "root";
const THEME_DEFAULT: &str = "default";
const NODE_TYPE: &str = "custom";
const EDGE_TYPE: &str = "custom-label";

/// Entry of the honeycomb listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoneycombSummary {
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
}

impl From<&HiveChild> for HoneycombSummary {
    fn from(child: &HiveChild) -> Self {
        Self {
            id: child.key(),
            title: child.title().to_string(),
            icon: child.icon().map(str::to_string),
        }
    }
}

/// Id-indexed view of a honeycomb or a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub id: String,
    pub title: String,
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub id: String,
    pub data: ViewNodeData,
    pub position: Position,
    #[serde(rename = "type")]
    pub node_type: String,
    pub width: u32,
    pub height: u32,
}

/// Attribute dict of a view node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNodeData {
    pub label: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
}

/// Graph page detail: nodes with URLs, edges with resolved endpoint titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDetail {
    pub name: String,
    pub title: String,
    pub nodes: Vec<DetailNode>,
    pub edges: Vec<DetailEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailNode {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailEdge {
    pub title: String,
    pub source: String,
    pub target: String,
    pub source_title: String,
    pub target_title: String,
    pub source_url: String,
    pub target_url: String,
    pub kind: String,
}

/// Builds views with resource URLs rooted at `base_url`.
pub struct ViewBuilder {
    base_url: String,
    layout: LayoutConfig,
}

impl ViewBuilder {
    pub fn new(base_url: impl Into<String>, layout: LayoutConfig) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, layout }
    }

    /// URL of a resource path under the base URL, with a trailing slash.
    /// Each segment is percent-encoded.
    pub fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url.push('/');
        url
    }

    /// Position of item `i` of `n` on the layout circle.
    fn position(&self, i: usize, n: usize) -> Position {
        let angle = if n > 0 { 2.0 * PI * i as f64 / n as f64 } else { 0.0 };
        Position {
            x: self.layout.radius * angle.cos(),
            y: self.layout.radius * angle.sin(),
        }
    }

    fn child_node(&self, id: String, cell: &Node, url: String, i: usize, n: usize) -> ViewNode {
        ViewNode {
            id,
            data: ViewNodeData {
                label: cell.title().to_string(),
                theme_color: THEME_DEFAULT.to_string(),
                url,
                icon: cell.icon().map(str::to_string),
            },
            position: self.position(i, n),
            node_type: NODE_TYPE.to_string(),
            width: self.layout.child_width,
            height: self.layout.child_height,
        }
    }

    /// Honeycomb as a star: the honeycomb at the centre, its cells around it.
    ///
    /// The root id is a UUIDv5 of the honeycomb URL, so it is stable
    /// across requests; cells use their own ids.
    pub fn honeycomb(&self, hc: &Honeycomb) -> GraphView {
        let hc_url = self.resource_url(&[hc.name()]);
        let root_id = Uuid::new_v5(&Uuid::NAMESPACE_URL, hc_url.as_bytes()).to_string();

        let root = ViewNode {
            id: root_id.clone(),
            data: ViewNodeData {
                label: hc.title().to_string(),
                theme_color: THEME_ROOT.to_string(),
                url: hc_url,
                icon: hc.icon().map(str::to_string),
            },
            position: Position { x: 0.0, y: 0.0 },
            node_type: NODE_TYPE.to_string(),
            width: self.layout.root_width,
            height: self.layout.root_height,
        };

        let n = hc.len();
        let children: Vec<ViewNode> = hc
            .cells()
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let url = self.resource_url(&[hc.name(), cell.key().as_str()]);
                self.child_node(cell.id().to_string(), cell, url, i, n)
            })
            .collect();

        let edges = children
            .iter()
            .map(|child| ViewEdge {
                id: format!("edge-{}-{}", root_id.replace('-', ""), child.id.replace('-', "")),
                source: root_id.clone(),
                target: child.id.clone(),
                edge_type: EDGE_TYPE.to_string(),
                label: None,
                kind: None,
            })
            .collect();

        let mut nodes = Vec::with_capacity(n + 1);
        nodes.push(root);
        nodes.extend(children);

        GraphView {
            id: root_id,
            title: hc.title().to_string(),
            nodes,
            edges,
        }
    }

    /// Graph with nodes keyed by name, laid out in insertion order.
    pub fn graph(&self, graph: &Graph) -> GraphView {
        let graph_key = graph.key();
        let n = graph.len();
        let nodes = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let key = node.key();
                let url = self.resource_url(&[graph_key.as_str(), key.as_str()]);
                self.child_node(key, node, url, i, n)
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| ViewEdge {
                id: format!("edge-{}", edge.name()),
                source: edge.from().name.clone(),
                target: edge.to().name.clone(),
                edge_type: EDGE_TYPE.to_string(),
                label: Some(edge.title().to_string()),
                kind: Some(edge.kind().to_string()),
            })
            .collect();

        GraphView {
            id: graph_key,
            title: graph.title().to_string(),
            nodes,
            edges,
        }
    }

    /// Detail of a graph for its page. Endpoint titles fall back to names.
    pub fn graph_detail(&self, graph: &Graph) -> GraphDetail {
        let graph_key = graph.key();
        let title_of = |name: &str| {
            graph
                .get_node_by_name(name)
                .map(|n| n.title())
                .filter(|t| !t.is_empty())
                .unwrap_or(name)
                .to_string()
        };

        let nodes = graph
            .nodes()
            .iter()
            .map(|node| {
                let key = node.key();
                DetailNode {
                    url: self.resource_url(&[graph_key.as_str(), key.as_str()]),
                    title: title_of(&key),
                    id: key,
                }
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| {
                let source = &edge.from().name;
                let target = &edge.to().name;
                DetailEdge {
                    title: edge.title().to_string(),
                    source: source.clone(),
                    target: target.clone(),
                    source_title: title_of(source),
                    target_title: title_of(target),
                    source_url: self.resource_url(&[graph_key.as_str(), source.as_str()]),
                    target_url: self.resource_url(&[graph_key.as_str(), target.as_str()]),
                    kind: edge.kind().to_string(),
                }
            })
            .collect();

        GraphDetail {
            name: graph_key,
            title: graph.title().to_string(),
            nodes,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ViewBuilder {
        ViewBuilder::new("http://localhost:6543/", LayoutConfig::default())
    }

    #[test]
    fn test_resource_url() {
        let b = builder();
        assert_eq!(b.resource_url(&["default"]), "http://localhost:6543/default/");
        assert_eq!(b.resource_url(&["default", "intro"]), "http://localhost:6543/default/intro/");
    }

    #[test]
    fn test_resource_url_encodes_segments() {
        let b = builder();
        assert_eq!(
            b.resource_url(&["main-graph", "a b/c?d"]),
            "http://localhost:6543/main-graph/a%20b%2Fc%3Fd/"
        );
    }

    #[test]
    fn test_positions_on_circle() {
        let b = builder();
        let first = b.position(0, 4);
        assert!((first.x - 300.0).abs() < 1e-9);
        assert!(first.y.abs() < 1e-9);
        let second = b.position(1, 4);
        assert!(second.x.abs() < 1e-9);
        assert!((second.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_honeycomb_has_only_root() {
        let view = builder().honeycomb(&Honeycomb::new("empty", "Empty"));
        assert_eq!(view.nodes.len(), 1);
        assert!(view.edges.is_empty());
        assert_eq!(view.nodes[0].data.theme_color, "root");
    }

    #[test]
    fn test_root_id_is_stable() {
        let hc = Honeycomb::new("default", "Default");
        assert_eq!(builder().honeycomb(&hc).id, builder().honeycomb(&hc).id);
    }
}
