//! Content-bearing vertices (cells).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::normalize_name;
use crate::codec::NodeRecord;

/// Payload of a node. Each kind carries only the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Plain text cell.
    Text { contents: String },
    /// Rich text cell; `source` holds the markup.
    RichText { source: String },
    /// A cell that is only an icon glyph (stored in the shared `icon` field).
    Icon,
    /// Link to external web content.
    WebContent { href: String },
    /// Animation served from a URL.
    Animation { href: String },
    /// Uploaded map image of a honeycomb.
    StaticMap {
        href: String,
        filename: Option<String>,
    },
    /// Map described by an arbitrary JSON structure.
    DynamicMap { structure: serde_json::Value },
    /// Interactive cell without payload.
    Interactive,
    /// Static cell without payload.
    Static,
}

impl NodeKind {
    /// Short, stable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Text { .. } => "text",
            NodeKind::RichText { .. } => "rich_text",
            NodeKind::Icon => "icon",
            NodeKind::WebContent { .. } => "web_content",
            NodeKind::Animation { .. } => "animation",
            NodeKind::StaticMap { .. } => "static_map",
            NodeKind::DynamicMap { .. } => "dynamic_map",
            NodeKind::Interactive => "interactive",
            NodeKind::Static => "static",
        }
    }
}

/// A content-bearing vertex inside a graph or a honeycomb.
///
/// The `id` is assigned at construction and never changes; it is the
/// canonical cross-index key when the node has no `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: Uuid,
    name: Option<String>,
    title: String,
    icon: Option<String>,
    /// Id of the owning graph or honeycomb. Non-owning.
    #[serde(default)]
    parent: Option<Uuid>,
    payload: NodeKind,
}

impl Node {
    /// Create a node with a fresh id. A blank name counts as absent.
    pub fn new(name: impl Into<String>, title: impl Into<String>, payload: NodeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: normalize_name(name),
            title: title.into(),
            icon: None,
            parent: None,
            payload,
        }
    }

    pub fn text(name: impl Into<String>, title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::new(name, title, NodeKind::Text { contents: contents.into() })
    }

    pub fn rich_text(name: impl Into<String>, title: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(name, title, NodeKind::RichText { source: source.into() })
    }

    pub fn icon_cell(name: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::new(name, title, NodeKind::Icon).with_icon(icon)
    }

    pub fn web_content(name: impl Into<String>, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(name, title, NodeKind::WebContent { href: href.into() })
    }

    pub fn animation(name: impl Into<String>, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(name, title, NodeKind::Animation { href: href.into() })
    }

    /// Unnamed map image; honeycomb maps are not keyed.
    pub fn static_map(href: impl Into<String>, filename: Option<String>) -> Self {
        Self::new(
            "",
            "",
            NodeKind::StaticMap {
                href: href.into(),
                filename,
            },
        )
    }

    pub fn dynamic_map(structure: serde_json::Value) -> Self {
        Self::new("", "", NodeKind::DynamicMap { structure })
    }

    /// Set the icon glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Collection key: the name if present, otherwise the id.
    pub fn key(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
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

    pub fn parent(&self) -> Option<Uuid> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Uuid) {
        self.parent = Some(parent);
    }

    /// Pin the key as the visible name. Unnamed nodes get their id.
    pub(crate) fn ensure_name(&mut self) {
        if self.name.is_none() {
            self.name = Some(self.id.to_string());
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.payload
    }

    /// Displayable body: text contents, rich-text source, href or icon glyph.
    pub fn contents(&self) -> Option<&str> {
        match &self.payload {
            NodeKind::Text { contents } => Some(contents),
            NodeKind::RichText { source } => Some(source),
            NodeKind::WebContent { href }
            | NodeKind::Animation { href }
            | NodeKind::StaticMap { href, .. } => Some(href),
            NodeKind::Icon => self.icon(),
            NodeKind::DynamicMap { .. } | NodeKind::Interactive | NodeKind::Static => None,
        }
    }

    /// Replace the text body. Returns false if this kind has no text body.
    pub fn set_contents(&mut self, value: impl Into<String>) -> bool {
        match &mut self.payload {
            NodeKind::Text { contents } => *contents = value.into(),
            NodeKind::RichText { source } => *source = value.into(),
            _ => return false,
        }
        true
    }

    pub fn href(&self) -> Option<&str> {
        match &self.payload {
            NodeKind::WebContent { href }
            | NodeKind::Animation { href }
            | NodeKind::StaticMap { href, .. } => Some(href),
            _ => None,
        }
    }

    /// Replace the link target. Returns false if this kind has no link.
    pub fn set_href(&mut self, value: impl Into<String>) -> bool {
        match &mut self.payload {
            NodeKind::WebContent { href }
            | NodeKind::Animation { href }
            | NodeKind::StaticMap { href, .. } => {
                *href = value.into();
                true
            }
            _ => false,
        }
    }

    /// Uploaded file name, for static maps.
    pub fn filename(&self) -> Option<&str> {
        match &self.payload {
            NodeKind::StaticMap { filename, .. } => filename.as_deref(),
            _ => None,
        }
    }

    /// Flat export record. Kinds without a flat shape return `None`.
    pub fn to_record(&self) -> Option<NodeRecord> {
        let id = self.key();
        let title = self.title.clone();
        match &self.payload {
            NodeKind::Text { contents } => Some(NodeRecord::Text {
                id,
                title,
                content: contents.clone(),
            }),
            NodeKind::Icon => Some(NodeRecord::Icon {
                id,
                title,
                icon: self.icon.clone(),
            }),
            NodeKind::WebContent { href } | NodeKind::Animation { href } => Some(NodeRecord::Link {
                id,
                title,
                href: href.clone(),
                icon: self.icon.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_node_keys_by_id() {
        let node = Node::text("", "Untitled", "body");
        assert!(node.name().is_none());
        assert_eq!(node.key(), node.id().to_string());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Node::text("a", "", "");
        let b = Node::text("a", "", "");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_contents_by_kind() {
        let mut text = Node::text("t", "T", "old");
        assert!(text.set_contents("new"));
        assert_eq!(text.contents(), Some("new"));

        let mut link = Node::web_content("w", "W", "https://example.org");
        assert!(!link.set_contents("ignored"));
        assert!(link.set_href("https://example.com"));
        assert_eq!(link.href(), Some("https://example.com"));
    }

    #[test]
    fn test_icon_cell_contents_is_glyph() {
        let icon = Node::icon_cell("logo", "Logo", "🐝");
        assert_eq!(icon.contents(), Some("🐝"));
        assert_eq!(icon.kind().as_str(), "icon");
    }

    #[test]
    fn test_rich_text_has_no_flat_record() {
        let node = Node::rich_text("r", "Rich", "<b>x</b>");
        assert!(node.to_record().is_none());
        assert!(Node::text("t", "T", "c").to_record().is_some());
    }

    #[test]
    fn test_static_map_filename() {
        let map = Node::static_map("/static/maps/a.png", Some("maps/a.png".to_string()));
        assert_eq!(map.filename(), Some("maps/a.png"));
        assert_eq!(map.href(), Some("/static/maps/a.png"));
    }
}
