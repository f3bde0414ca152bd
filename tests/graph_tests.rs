use lazy_sssp::algorithm::validation::validate_graph;
use lazy_sssp::graph::document::GraphDocument;
use lazy_sssp::graph::generators::{grid_graph, layered_graph, random_graph};
use lazy_sssp::{AdjacencyGraph, Error, Graph, MutableGraph, ShortestPathEngine};

#[test]
fn test_add_vertices_and_edges() {
    let mut graph: AdjacencyGraph<&str, f64> = AdjacencyGraph::new();
    assert!(graph.add_vertex("A"));
    assert!(graph.add_vertex("B"));
    assert!(!graph.add_vertex("A"), "duplicate vertex");

    assert!(graph.add_edge("A", "B", 2.0));
    assert!(!graph.add_edge("A", "Z", 1.0), "unknown endpoint");
    assert!(!graph.add_edge("B", "A", -1.0), "negative weight");
    assert!(!graph.add_edge("B", "A", f64::NAN), "NaN weight");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(2.0));
    assert!(!graph.has_edge(&"B", &"A"));
}

#[test]
fn test_adding_an_existing_edge_updates_it() {
    let mut graph: AdjacencyGraph<u8, f64> = AdjacencyGraph::new();
    graph.add_vertex(0);
    graph.add_vertex(1);
    graph.add_edge(0, 1, 5.0);
    graph.add_edge(0, 1, 3.0);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&0, &1), Some(3.0));
}

#[test]
fn test_update_and_remove_edges() {
    let mut graph: AdjacencyGraph<u8, f64> = AdjacencyGraph::new();
    graph.add_vertex(0);
    graph.add_vertex(1);
    assert!(graph.add_undirected_edge(0, 1, 2.0));

    assert!(graph.update_edge_weight(&0, &1, 7.0));
    assert!(!graph.update_edge_weight(&0, &1, -7.0));
    assert!(!graph.update_edge_weight(&1, &1, 1.0));
    assert_eq!(graph.edge_weight(&0, &1), Some(7.0));
    assert_eq!(graph.edge_weight(&1, &0), Some(2.0));

    assert!(graph.remove_edge(&0, &1));
    assert!(!graph.remove_edge(&0, &1));
    assert_eq!(graph.edge_count(), 1);

    let table = ShortestPathEngine::new().compute(&graph, &0).unwrap();
    assert_eq!(table.get(&1), Some(f64::INFINITY));
}

#[test]
fn test_path_weight() {
    let graph = grid_graph(3, 3);
    assert_eq!(graph.path_weight(&[0, 1, 2, 5, 8]), Some(4.0));
    assert_eq!(graph.path_weight(&[0]), Some(0.0));
    assert_eq!(graph.path_weight(&[0, 4]), None, "no diagonal edges");
}

#[test]
fn test_to_adjacency_map_round_trip() {
    let graph = random_graph(40, 2.0, 1);
    let map = graph.to_adjacency_map();
    assert_eq!(map.len(), graph.vertex_count());
    assert_eq!(Graph::edge_count(&map), graph.edge_count());

    let engine = ShortestPathEngine::new();
    assert_eq!(engine.compute(&map, &0).unwrap(), engine.compute(&graph, &0).unwrap());
}

#[test]
fn test_document_parsing() {
    let json = r#"{"A": {"B": 5, "C": 10}, "B": {"D": 3}, "C": {"D": 2}, "D": {}}"#;
    let document = GraphDocument::from_json(json).unwrap();
    assert_eq!(document.vertex_count(), 4);
    assert_eq!(document.edge_count(), 4);

    let graph = document.to_graph().unwrap();
    let table = ShortestPathEngine::new()
        .compute(&graph, &"A".to_string())
        .unwrap();
    assert_eq!(table.get(&"D".to_string()), Some(8.0));
}

#[test]
fn test_document_errors() {
    assert!(matches!(
        GraphDocument::from_json("{\"A\": [1, 2]}"),
        Err(Error::InvalidDocument(_))
    ));

    let dangling = GraphDocument::from_json(r#"{"A": {"B": 1}}"#).unwrap();
    assert!(matches!(dangling.to_graph(), Err(Error::MalformedGraph { .. })));
}

#[test]
fn test_document_from_graph() {
    let graph = grid_graph(2, 1);
    let document = GraphDocument::from_graph(&graph);

    assert_eq!(document.to_json().unwrap(), r#"{"0":{"1":1.0},"1":{"0":1.0}}"#);
    assert_eq!(document.to_adjacency_map()["0"]["1"], 1.0);
}

#[test]
fn test_generators_are_seeded() {
    let a = random_graph(200, 3.0, 42);
    let b = random_graph(200, 3.0, 42);
    assert_eq!(a.to_adjacency_map(), b.to_adjacency_map());
    assert!(validate_graph(&a).is_ok());
    assert!(a.edge_count() > 0);

    let single = random_graph(1, 3.0, 42);
    assert_eq!(single.vertex_count(), 1);
    assert_eq!(single.edge_count(), 0);
}

#[test]
fn test_grid_and_layered_shapes() {
    let grid = grid_graph(4, 3);
    assert_eq!(grid.vertex_count(), 12);
    // 3 horizontal links per row, 4 vertical links per row gap, both directions
    assert_eq!(grid.edge_count(), 2 * (3 * 3 + 4 * 2));

    let layered = layered_graph(4, 3, 0);
    assert_eq!(layered.vertex_count(), 1 + 3 * 3);
    assert_eq!(layered.edge_count(), 3 + 9 + 9);
}
