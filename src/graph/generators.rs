use crate::graph::{AdjacencyGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges.
/// Weights are drawn from [1, 100); self-loops are skipped. The same seed yields the same graph
pub fn random_graph(n: usize, edge_factor: f64, seed: u64) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a 4-connected grid of `width * height` vertices with unit weights in both
/// directions. Vertex `(x, y)` has id `y * width + x`
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(current, current + 1, 1.0);
            }
            if y + 1 < height {
                graph.add_undirected_edge(current, current + width, 1.0);
            }
        }
    }

    graph
}

/// Generates a layered DAG: every vertex of layer `i` links to every vertex of layer `i + 1`
/// with a random weight in [1, 10). Layer 0 holds the single vertex 0.
///
/// Dense forward links make many tentative distances improve several times, which leaves
/// plenty of superseded queue entries behind.
pub fn layered_graph(layers: usize, width: usize, seed: u64) -> AdjacencyGraph<usize, f64> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    graph.add_vertex(0);
    let mut previous = vec![0];
    let mut next_id = 1;

    for _ in 1..layers {
        let layer: Vec<usize> = (next_id..next_id + width).collect();
        next_id += width;
        for &v in &layer {
            graph.add_vertex(v);
        }
        for &u in &previous {
            for &v in &layer {
                graph.add_edge(u, v, rng.gen_range(1.0..10.0));
            }
        }
        previous = layer;
    }

    graph
}
