use honeycomb_core::{AddOutcome, Edge, Graph, Node, RemoveOutcome};

fn graph_with(names: &[&str]) -> Graph {
    let mut graph = Graph::new("g", "G");
    for name in names {
        assert!(graph.add_node(Node::text(*name, name.to_uppercase(), "")).is_applied());
    }
    graph
}

#[test]
fn test_duplicate_node_name_is_ignored() {
    let mut graph = Graph::new("g", "");
    assert_eq!(graph.add_node(Node::text("a", "first", "")), AddOutcome::Applied);
    assert_eq!(graph.add_node(Node::text("a", "second", "")), AddOutcome::Duplicate);

    assert_eq!(graph.nodes().iter().filter(|n| n.key() == "a").count(), 1);
    assert_eq!(graph.get_node_by_name("a").unwrap().title(), "first");
}

#[test]
fn test_add_edge_requires_both_endpoints() {
    let mut graph = graph_with(&["a", "b"]);
    let a = graph.get_node_by_name("a").unwrap().clone();
    let b = graph.get_node_by_name("b").unwrap().clone();
    let outsider = Node::text("c", "C", "");

    assert_eq!(
        graph.add_edge(Edge::new("a-c", "", &a, &outsider, "")),
        AddOutcome::InvalidReference
    );
    assert_eq!(
        graph.add_edge(Edge::new("c-b", "", &outsider, &b, "")),
        AddOutcome::InvalidReference
    );
    assert!(graph.edges().is_empty());

    assert_eq!(graph.add_edge(Edge::new("a-b", "rel", &a, &b, "link")), AddOutcome::Applied);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].parent(), Some(graph.id()));
}

#[test]
fn test_edge_built_before_membership_is_checked_at_add_time() {
    let mut graph = Graph::new("g", "");
    let a = Node::text("a", "", "");
    let b = Node::text("b", "", "");
    let edge = Edge::new("a-b", "", &a, &b, "");

    let _ = graph.add_node(a);
    assert_eq!(graph.add_edge(edge.clone()), AddOutcome::InvalidReference);
    let _ = graph.add_node(b);
    assert_eq!(graph.add_edge(edge), AddOutcome::Applied);
}

#[test]
fn test_unnamed_nodes_can_be_connected() {
    let mut graph = Graph::new("", "");
    let a = Node::text("", "", "c1");
    let b = Node::text("", "", "c2");
    let edge = Edge::new("", "uuid-edge", &a, &b, "");

    let _ = graph.add_node(a);
    let _ = graph.add_node(b);
    assert!(graph.add_edge(edge).is_applied());
    assert!(graph.name().is_none());
    assert_eq!(graph.key(), graph.id().to_string());
    assert!(!graph.edges()[0].name().is_empty());
}

#[test]
fn test_insertion_order_is_preserved() {
    let graph = graph_with(&["z", "a", "m"]);
    let names: Vec<_> = graph.nodes().iter().map(Node::key).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
    assert_eq!(graph.node_at(1).map(Node::key), Some("a".to_string()));
}

#[test]
fn test_del_node_leaves_dangling_edges() {
    let mut graph = graph_with(&["a", "b"]);
    let _ = graph.connect("a", "b", "rel", "link");
    let id = graph.get_node_by_name("b").unwrap().id();

    assert_eq!(graph.del_node(id), RemoveOutcome::Removed);
    assert_eq!(graph.edges().len(), 1);

    let dangling = graph.validate();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].name(), "a-b");

    assert_eq!(graph.del_node(id), RemoveOutcome::NotFound);
}

#[test]
fn test_del_node_cascade_scrubs_edges() {
    let mut graph = graph_with(&["a", "b", "c"]);
    let _ = graph.connect("a", "b", "", "");
    let _ = graph.connect("b", "c", "", "");
    let _ = graph.connect("a", "c", "", "");
    let id = graph.get_node_by_name("b").unwrap().id();

    assert_eq!(graph.del_node_cascade(id), Some(2));
    assert_eq!(graph.edges().len(), 1);
    assert!(graph.validate().is_empty());
    assert_eq!(graph.del_node_cascade(id), None);
}

#[test]
fn test_edges_mut_bypasses_membership() {
    let mut graph = graph_with(&["a"]);
    let a = graph.get_node_by_name("a").unwrap().clone();
    let ghost = Node::text("ghost", "", "");
    graph.edges_mut().push(Edge::new("a-ghost", "", &a, &ghost, ""));

    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.validate().len(), 1);
}

#[test]
fn test_to_record_skips_kinds_without_flat_shape() {
    let mut graph = Graph::new("g", "Title");
    let _ = graph.add_node(Node::text("t", "Text", "body"));
    let _ = graph.add_node(Node::rich_text("r", "Rich", "<p/>"));
    let _ = graph.add_node(Node::icon_cell("i", "Icon", "🐝"));
    let _ = graph.connect("t", "i", "rel", "link");

    let record = graph.to_record();
    assert_eq!(record.name.as_deref(), Some("g"));
    assert_eq!(record.title, "Title");
    let ids: Vec<_> = record.nodes.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["t", "i"]);
    assert_eq!(record.edges.len(), 1);
    assert_eq!(record.edges[0].label, "rel");
}
