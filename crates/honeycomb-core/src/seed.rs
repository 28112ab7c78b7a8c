//! Initial content of a new hive.

use tracing::info;

use crate::config::{DEFAULT_MAIN_GRAPH, DEFAULT_ROOT_KEY};
use crate::model::{BeeHive, Edge, Graph, Honeycomb, Node};

/// Build the hive a fresh store starts with.
///
/// - honeycomb `default` with a text, an icon, a link and an animation cell
/// - graph `main-graph` with two text nodes joined by a `link` edge
/// - honeycomb `games` with two embedded games
pub fn default_hive() -> BeeHive {
    let mut hive = BeeHive::new();
    hive.set_name(DEFAULT_ROOT_KEY, "BeeHive");

    let mut default = Honeycomb::new("default", "Welcome Bees");
    let _ = default.add_cell(Node::text("intro", "Introduction", "Welcome text"));
    let _ = default.add_cell(Node::icon_cell("logo", "Bee Logo", "🐝"));
    let _ = default.add_cell(Node::web_content("link", "Website", "https://www.wikipedia.org"));
    let _ = default.add_cell(
        Node::animation("bee-dance", "Bee Dance", "/static/bee-dance.gif").with_icon("🐝"),
    );
    let _ = hive.insert(default);

    let mut graph = Graph::new(DEFAULT_MAIN_GRAPH, "Connection Map");
    let node_a = Node::text("node-a", "Node A", "Content A");
    let node_b = Node::text("node-b", "Node B", "Content B");
    let edge = Edge::new("link-ab", "A → B", &node_a, &node_b, "link");
    let _ = graph.add_node(node_a);
    let _ = graph.add_node(node_b);
    let _ = graph.add_edge(edge);
    hive.add_graph(&graph);
    let _ = hive.insert(graph);

    let mut games = Honeycomb::new("games", "Games Honeycomb");
    let _ = games.add_cell(Node::web_content("snake", "Snake Game", "/static/snake/index.html"));
    let _ = games.add_cell(Node::web_content("unity-game", "Unity Game", "/static/WEB/index.html"));
    let _ = hive.insert(games);

    info!(children = hive.len(), "seeded default hive");
    hive
}
