use honeycomb_core::codec::{check_payload, import_bytes, import_graph};
use honeycomb_core::{Graph, ImportError, Node, ValidationError};
use serde_json::json;

const LIMIT: usize = 2 * 1024 * 1024;

fn scenario() -> serde_json::Value {
    json!({
        "nodes": [{"id": "n1", "title": "A"}, {"id": "n2", "title": "B"}],
        "edges": [{"source": "n1", "target": "n2", "label": "rel"}]
    })
}

#[test]
fn test_import_into_empty_graph() {
    let mut graph = Graph::new("main-graph", "");
    let report = import_graph(&mut graph, &scenario()).unwrap();

    assert_eq!(report.nodes, 2);
    assert_eq!(report.edges, 1);
    assert_eq!(report.skipped_edges, 0);

    let names: Vec<_> = graph.nodes().iter().map(Node::key).collect();
    assert_eq!(names, vec!["n1", "n2"]);
    let edge = &graph.edges()[0];
    assert_eq!(edge.from().name, "n1");
    assert_eq!(edge.to().name, "n2");
    assert_eq!(edge.title(), "rel");
    assert_eq!(edge.name(), "n1-n2");
}

#[test]
fn test_reimport_replaces_content() {
    let mut graph = Graph::new("main-graph", "");
    import_graph(&mut graph, &scenario()).unwrap();
    import_graph(&mut graph, &scenario()).unwrap();

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn test_edge_to_unknown_node_is_skipped() {
    let mut graph = Graph::new("g", "");
    let doc = json!({
        "nodes": [{"id": "n1"}],
        "edges": [{"source": "n1", "target": "missing"}]
    });

    let report = import_graph(&mut graph, &doc).unwrap();
    assert_eq!(report.edges, 0);
    assert_eq!(report.skipped_edges, 1);
    assert!(graph.edges().is_empty());
    assert_eq!(graph.nodes().len(), 1);
}

#[test]
fn test_duplicate_id_fails_and_leaves_graph_untouched() {
    let mut graph = Graph::new("g", "");
    let _ = graph.add_node(Node::text("keep", "Keep", ""));
    let doc = json!({"nodes": [{"id": "dup"}, {"id": "dup"}], "edges": []});

    let err = import_graph(&mut graph, &doc).unwrap_err();
    assert_eq!(err, ValidationError::DuplicateNodeId("dup".to_string()));
    assert!(err.to_string().contains("dup"));

    let names: Vec<_> = graph.nodes().iter().map(Node::key).collect();
    assert_eq!(names, vec!["keep"]);
}

#[test]
fn test_late_edge_error_does_not_apply_nodes() {
    let mut graph = Graph::new("g", "");
    let doc = json!({
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [{"source": "a", "target": "b"}, {"source": 1, "target": "b"}]
    });

    let err = import_graph(&mut graph, &doc).unwrap_err();
    assert_eq!(err, ValidationError::EdgeEndpoints { index: 2 });
    assert!(graph.is_empty());
}

#[test]
fn test_structural_errors() {
    let mut graph = Graph::new("g", "");

    assert_eq!(
        import_graph(&mut graph, &json!([])).unwrap_err(),
        ValidationError::RootNotObject
    );
    assert_eq!(
        import_graph(&mut graph, &json!({"nodes": {}})).unwrap_err(),
        ValidationError::NotArrays
    );
    assert_eq!(
        import_graph(&mut graph, &json!({"nodes": ["x"]})).unwrap_err(),
        ValidationError::NodeNotObject { index: 1 }
    );
    assert_eq!(
        import_graph(&mut graph, &json!({"nodes": [{"id": "ok"}, {"id": "  "}]})).unwrap_err(),
        ValidationError::NodeMissingId { index: 2 }
    );
    assert_eq!(
        import_graph(&mut graph, &json!({"nodes": [{"title": "no id"}]})).unwrap_err(),
        ValidationError::NodeMissingId { index: 1 }
    );
    assert_eq!(
        import_graph(&mut graph, &json!({"edges": [3]})).unwrap_err(),
        ValidationError::EdgeNotObject { index: 1 }
    );
}

#[test]
fn test_missing_lists_import_nothing() {
    let mut graph = Graph::new("g", "");
    let _ = graph.add_node(Node::text("old", "", ""));
    let report = import_graph(&mut graph, &json!({})).unwrap();
    assert_eq!(report.nodes, 0);
    assert!(graph.is_empty());
}

#[test]
fn test_generated_edge_names_are_deduplicated() {
    let mut graph = Graph::new("g", "");
    let doc = json!({
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [
            {"source": "a", "target": "b", "label": "one"},
            {"source": "a", "target": "b", "label": "two"},
            {"source": "a", "target": "b", "label": "three"}
        ]
    });

    import_graph(&mut graph, &doc).unwrap();
    let names: Vec<_> = graph.edges().iter().map(|e| e.name().to_string()).collect();
    assert_eq!(names, vec!["a-b", "a-b-2", "a-b-3"]);
}

#[test]
fn test_missing_title_and_content_default_to_empty() {
    let mut graph = Graph::new("g", "");
    import_graph(&mut graph, &json!({"nodes": [{"id": "a", "title": null}]})).unwrap();
    let node = graph.get_node_by_name("a").unwrap();
    assert_eq!(node.title(), "");
    assert_eq!(node.contents(), Some(""));
}

#[test]
fn test_payload_gate() {
    assert!(matches!(check_payload(b"", None, LIMIT), Err(ImportError::Empty)));
    assert!(matches!(
        check_payload(b"{}", Some("image/png"), LIMIT),
        Err(ImportError::UnsupportedContentType(ct)) if ct == "image/png"
    ));
    assert!(matches!(
        check_payload(b"{\"nodes\": [", Some("application/json"), LIMIT),
        Err(ImportError::InvalidJson(_))
    ));
    let oversized = vec![b' '; 17];
    assert!(matches!(
        check_payload(&oversized, None, 16),
        Err(ImportError::TooLarge { limit: 16 })
    ));
    assert!(check_payload(b"{}", Some("text/json"), LIMIT).is_ok());
    assert!(check_payload(b"{}", Some(""), LIMIT).is_ok());
}

#[test]
fn test_import_bytes_reports_validation() {
    let mut graph = Graph::new("g", "");
    let err = import_bytes(&mut graph, br#"{"nodes": 1}"#, None, LIMIT).unwrap_err();
    assert!(matches!(err, ImportError::Validation(ValidationError::NotArrays)));
    assert!(!err.is_payload_error());
}
