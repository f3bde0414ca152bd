use lazy_sssp::{AdjacencyGraph, DistanceTable, Error, MutableGraph, ShortestPathEngine};
use std::collections::HashMap;

type Adjacency = HashMap<&'static str, HashMap<&'static str, f64>>;

// The five-vertex sample graph, symmetric weights
fn create_sample_graph() -> Adjacency {
    HashMap::from([
        ("A", HashMap::from([("B", 5.0), ("C", 10.0)])),
        ("B", HashMap::from([("A", 5.0), ("D", 3.0)])),
        ("C", HashMap::from([("A", 10.0), ("D", 2.0)])),
        ("D", HashMap::from([("B", 3.0), ("C", 2.0), ("E", 4.0)])),
        ("E", HashMap::from([("D", 4.0)])),
    ])
}

fn assert_table(table: &DistanceTable<&'static str, f64>, expected: &[(&'static str, f64)]) {
    assert_eq!(table.len(), expected.len(), "table must cover exactly the graph's vertices");
    for (vertex, distance) in expected {
        assert_eq!(table.get(vertex), Some(*distance), "distance to {}", vertex);
    }
}

#[test]
fn test_sample_graph_from_a() {
    let graph = create_sample_graph();
    let table = ShortestPathEngine::new().compute(&graph, &"A").unwrap();

    assert_table(&table, &[("A", 0.0), ("B", 5.0), ("C", 10.0), ("D", 8.0), ("E", 12.0)]);
    assert_eq!(table.start(), &"A");
    assert_eq!(table.reachable_count(), 5);
}

#[test]
fn test_sample_graph_from_e() {
    let graph = create_sample_graph();
    let table = ShortestPathEngine::new().compute(&graph, &"E").unwrap();

    assert_table(&table, &[("E", 0.0), ("D", 4.0), ("B", 7.0), ("C", 6.0), ("A", 12.0)]);
}

#[test]
fn test_disconnected_vertex_is_infinite() {
    let graph: Adjacency = HashMap::from([
        ("A", HashMap::from([("B", 1.0)])),
        ("B", HashMap::new()),
        ("C", HashMap::new()),
    ]);
    let table = ShortestPathEngine::new().compute(&graph, &"A").unwrap();

    assert_eq!(table.get(&"A"), Some(0.0));
    assert_eq!(table.get(&"B"), Some(1.0));
    // Present with the sentinel, not absent
    assert!(table.contains(&"C"));
    assert_eq!(table.get(&"C"), Some(f64::INFINITY));
    assert_eq!(table.get(&"C"), Some(DistanceTable::<&str, f64>::infinity()));
    assert_eq!(table.distance(&"C"), None);
    assert!(!table.is_reachable(&"C"));
    assert_eq!(table.unreachable().collect::<Vec<_>>(), vec![&"C"]);
}

#[test]
fn test_single_vertex_graph() {
    let graph: Adjacency = HashMap::from([("A", HashMap::new())]);
    let table = ShortestPathEngine::new().compute(&graph, &"A").unwrap();

    assert_table(&table, &[("A", 0.0)]);
}

#[test]
fn test_missing_start_vertex() {
    let graph = create_sample_graph();
    let result = ShortestPathEngine::new().compute(&graph, &"Z");

    match result {
        Err(Error::VertexNotFound(vertex)) => assert_eq!(vertex, "\"Z\""),
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_directed_edges_are_one_way() {
    let graph: Adjacency = HashMap::from([
        ("A", HashMap::from([("B", 2.0)])),
        ("B", HashMap::new()),
    ]);
    let table = ShortestPathEngine::new().compute(&graph, &"B").unwrap();

    assert_eq!(table.get(&"B"), Some(0.0));
    assert_eq!(table.get(&"A"), Some(f64::INFINITY));
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let graph: Adjacency = HashMap::from([
        ("A", HashMap::from([("A", 0.0), ("B", 0.0)])),
        ("B", HashMap::from([("C", 0.0), ("B", 3.0)])),
        ("C", HashMap::from([("A", 1.0)])),
    ]);
    let table = ShortestPathEngine::new().compute(&graph, &"A").unwrap();

    assert_table(&table, &[("A", 0.0), ("B", 0.0), ("C", 0.0)]);
}

#[test]
fn test_stale_entries_are_discarded() {
    // From E, A is first reached through C at 16, then improved through B to 12;
    // the superseded (16, A) entry surfaces after A is finalized
    let graph = create_sample_graph();
    let (table, stats) = ShortestPathEngine::new()
        .compute_with_stats(&graph, &"E")
        .unwrap();

    assert_eq!(table.get(&"A"), Some(12.0));
    assert_eq!(stats.finalized, 5);
    assert_eq!(stats.stale_pops, 1);
    assert_eq!(stats.relaxations, 5);
    assert_eq!(stats.pushes, 6);
    assert_eq!(stats.pops, 6);
}

#[test]
fn test_sorted_by_distance() {
    let graph = create_sample_graph();
    let table = ShortestPathEngine::new().compute(&graph, &"E").unwrap();

    let order: Vec<&str> = table.sorted_by_distance().into_iter().map(|(v, _)| *v).collect();
    assert_eq!(order, vec!["E", "D", "C", "B", "A"]);
}

#[test]
fn test_adjacency_graph_matches_mapping() {
    let mapping = create_sample_graph();
    let graph = AdjacencyGraph::from_adjacency(mapping.clone()).unwrap();

    for start in ["A", "B", "C", "D", "E"] {
        let from_mapping = ShortestPathEngine::new().compute(&mapping, &start).unwrap();
        let from_graph = ShortestPathEngine::new().compute(&graph, &start).unwrap();
        assert_eq!(from_mapping, from_graph);
    }
}

#[test]
fn test_integer_vertex_ids() {
    let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
    for v in 0..4 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, 1.5);
    graph.add_edge(1, 2, 1.5);
    graph.add_edge(0, 2, 4.0);

    let table = ShortestPathEngine::new().compute(&graph, &0).unwrap();
    assert_eq!(table.get(&2), Some(3.0));
    assert_eq!(table.get(&3), Some(f32::INFINITY));
    assert_eq!(table.into_map().len(), 4);
}
