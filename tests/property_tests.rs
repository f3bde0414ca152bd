use lazy_sssp::graph::generators::{grid_graph, layered_graph, random_graph};
use lazy_sssp::{
    BellmanFord, DistanceTable, Graph, MutableGraph, ShortestPathAlgorithm, ShortestPathEngine,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

type Adjacency = HashMap<usize, HashMap<usize, f64>>;

// Small random graph with integral weights in [0, 20), so path sums are exact
fn small_random_graph(rng: &mut StdRng) -> Adjacency {
    let n = rng.gen_range(1..=7);
    let mut graph: Adjacency = (0..n).map(|v| (v, HashMap::new())).collect();
    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(0.35) {
                let weight = rng.gen_range(0..20) as f64;
                graph.get_mut(&u).unwrap().insert(v, weight);
            }
        }
    }
    graph
}

// Minimum weight over all simple paths from `start`, by exhaustive depth-first enumeration
fn brute_force(graph: &Adjacency, start: usize) -> HashMap<usize, f64> {
    fn explore(
        graph: &Adjacency,
        vertex: usize,
        total: f64,
        on_path: &mut HashSet<usize>,
        best: &mut HashMap<usize, f64>,
    ) {
        let entry = best.get_mut(&vertex).unwrap();
        if total < *entry {
            *entry = total;
        }
        for (&next, &weight) in &graph[&vertex] {
            if on_path.insert(next) {
                explore(graph, next, total + weight, on_path, best);
                on_path.remove(&next);
            }
        }
    }

    let mut best: HashMap<usize, f64> = graph.keys().map(|&v| (v, f64::INFINITY)).collect();
    let mut on_path = HashSet::from([start]);
    explore(graph, start, 0.0, &mut on_path, &mut best);
    best
}

fn assert_same_distances(a: &DistanceTable<usize, f64>, b: &DistanceTable<usize, f64>) {
    assert_eq!(a.len(), b.len());
    for (vertex, expected) in b.iter() {
        let actual = a.get(vertex).unwrap();
        if expected.is_infinite() {
            assert!(actual.is_infinite(), "vertex {} should be unreachable", vertex);
        } else {
            let close = (actual - expected).abs() < 1e-6;
            assert!(close, "vertex {}: {} vs {}", vertex, actual, expected);
        }
    }
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let engine = ShortestPathEngine::new();

    for _ in 0..300 {
        let graph = small_random_graph(&mut rng);
        let start = rng.gen_range(0..graph.len());
        let table = engine.compute(&graph, &start).unwrap();
        let expected = brute_force(&graph, start);

        assert_eq!(table.len(), graph.len());
        for (vertex, distance) in &expected {
            assert_eq!(table.get(vertex), Some(*distance), "graph {:?} from {}", graph, start);
        }
    }
}

#[test]
fn test_start_is_always_zero() {
    let mut rng = StdRng::seed_from_u64(11);
    let engine = ShortestPathEngine::new();

    for _ in 0..100 {
        let graph = small_random_graph(&mut rng);
        for start in graph.keys() {
            let table = engine.compute(&graph, start).unwrap();
            assert_eq!(table.get(start), Some(0.0));
        }
    }
}

#[test]
fn test_unreachable_vertices_stay_infinite() {
    let mut rng = StdRng::seed_from_u64(23);
    let engine = ShortestPathEngine::new();

    for _ in 0..100 {
        let graph = small_random_graph(&mut rng);
        let table = engine.compute(&graph, &0).unwrap();

        // Forward reachability by plain graph search
        let mut reached = HashSet::from([0usize]);
        let mut stack = vec![0usize];
        while let Some(v) = stack.pop() {
            for &next in graph[&v].keys() {
                if reached.insert(next) {
                    stack.push(next);
                }
            }
        }

        for vertex in graph.keys() {
            assert_eq!(table.is_reachable(vertex), reached.contains(vertex));
        }
        assert_eq!(table.reachable_count(), reached.len());
    }
}

#[test]
fn test_compute_is_idempotent() {
    let graph = random_graph(500, 3.0, 99);
    let engine = ShortestPathEngine::new();

    let first = engine.compute(&graph, &0).unwrap();
    let second = engine.compute(&graph, &0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_raising_a_weight_never_lowers_a_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = ShortestPathEngine::new();

    for seed in 0..30 {
        let mut graph = random_graph(60, 3.0, seed);
        let before = engine.compute(&graph, &0).unwrap();

        let edges: Vec<(usize, usize, f64)> = graph
            .vertices()
            .flat_map(|u| graph.outgoing_edges(u).map(move |(v, w)| (*u, *v, w)))
            .collect();
        if edges.is_empty() {
            continue;
        }
        let (u, v, w) = edges[rng.gen_range(0..edges.len())];
        assert!(graph.update_edge_weight(&u, &v, w + rng.gen_range(1.0..50.0)));

        let after = engine.compute(&graph, &0).unwrap();
        for (vertex, old) in before.iter() {
            let new = after.get(vertex).unwrap();
            assert!(new >= old, "vertex {} went from {} to {}", vertex, old, new);
        }
    }
}

#[test]
fn test_agrees_with_bellman_ford() {
    let engine = ShortestPathEngine::new();
    let reference = BellmanFord::new();

    for seed in 0..10 {
        let graph = random_graph(300, 2.5, seed);
        for start in [0usize, 17, 150] {
            let fast = engine.compute(&graph, &start).unwrap();
            let slow = reference.compute(&graph, &start).unwrap();
            assert_same_distances(&fast, &slow);
        }
    }
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (12, 9);
    let graph = grid_graph(width, height);
    let table = ShortestPathEngine::new().compute(&graph, &0).unwrap();

    for y in 0..height {
        for x in 0..width {
            assert_eq!(table.get(&(y * width + x)), Some((x + y) as f64));
        }
    }
}

#[test]
fn test_stats_account_for_every_entry() {
    let engine = ShortestPathEngine::new();

    for seed in 0..5 {
        let graph = layered_graph(8, 6, seed);
        let (table, stats) = engine.compute_with_stats(&graph, &0).unwrap();

        assert_eq!(stats.finalized, table.reachable_count());
        assert_eq!(stats.pops, stats.finalized + stats.stale_pops);
        assert_eq!(stats.pushes, stats.relaxations + 1);
        // The queue runs dry, so every pushed entry was popped
        assert_eq!(stats.pushes, stats.pops);
    }
}

#[test]
fn test_layered_graphs_leave_stale_entries() {
    // Each vertex of a dense layer is improved several times before it is finalized
    let graph = layered_graph(10, 8, 5);
    let (_, stats) = ShortestPathEngine::new().compute_with_stats(&graph, &0).unwrap();

    assert!(stats.stale_pops > 0);
    assert!(stats.relaxations > stats.finalized);
}
