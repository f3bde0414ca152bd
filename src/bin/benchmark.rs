use std::time::{Duration, Instant};
use lazy_sssp::algorithm::{bellman_ford::BellmanFord, ShortestPathAlgorithm};
use lazy_sssp::graph::generators::random_graph;
use lazy_sssp::graph::{AdjacencyGraph, Graph};
use lazy_sssp::{DistanceTable, ShortestPathEngine};

// Bellman-Ford is O(V * E); past this size only the heap engine runs
const REFERENCE_LIMIT: usize = 5_000;

fn run_engine(
    graph: &AdjacencyGraph<usize, f64>,
    source: usize,
) -> (DistanceTable<usize, f64>, Duration) {
    let engine = ShortestPathEngine::new();
    let start = Instant::now();
    let (table, stats) = engine
        .compute_with_stats(graph, &source)
        .expect("source 0 is always a vertex of the generated graph");
    let duration = start.elapsed();

    let stale_ratio = stats.stale_pops as f64 / stats.pops.max(1) as f64;
    println!(
        "  - dijkstra: {} reachable vertices in {:?} ({} pops, {:.1}% stale)",
        table.reachable_count(),
        duration,
        stats.pops,
        stale_ratio * 100.0
    );

    (table, duration)
}

fn run_reference(
    graph: &AdjacencyGraph<usize, f64>,
    source: usize,
) -> (DistanceTable<usize, f64>, Duration) {
    let reference = BellmanFord::new();
    let start = Instant::now();
    let table = reference
        .compute(graph, &source)
        .expect("source 0 is always a vertex of the generated graph");
    let duration = start.elapsed();
    println!("  - bellman-ford: finished in {:?}", duration);
    (table, duration)
}

fn assert_agree(fast: &DistanceTable<usize, f64>, reference: &DistanceTable<usize, f64>) {
    for (vertex, expected) in reference.iter() {
        let actual = fast.get(vertex).unwrap_or(f64::NAN);
        let agree = (actual.is_infinite() && expected.is_infinite())
            || (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0);
        assert!(agree, "vertex {}: dijkstra {} vs bellman-ford {}", vertex, actual, expected);
    }
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 5_000, 50_000, 200_000, 500_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: lazy-deletion Dijkstra vs Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, 42 + i as u64);
        let source = 0;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (table, dijkstra_time) = run_engine(&graph, source);
        let reference_time = if size <= REFERENCE_LIMIT {
            let (reference, time) = run_reference(&graph, source);
            assert_agree(&table, &reference);
            println!("  - engines agree on all {} vertices", reference.len());
            Some(time)
        } else {
            None
        };

        results.push((size, dijkstra_time, reference_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<18} | {:<10}", "Vertices", "Dijkstra (ms)", "Bellman-Ford (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, reference_time) in &results {
        let dijkstra_ms = dijkstra_time.as_secs_f64() * 1000.0;
        match reference_time {
            Some(reference_time) => {
                let speedup = reference_time.as_secs_f64() / dijkstra_time.as_secs_f64();
                println!(
                    "{:<10} | {:<15.2} | {:<18.2} | {:<10.2}",
                    size,
                    dijkstra_ms,
                    reference_time.as_secs_f64() * 1000.0,
                    speedup
                );
            }
            None => println!("{:<10} | {:<15.2} | {:<18} | {:<10}", size, dijkstra_ms, "-", "-"),
        }
    }
}
