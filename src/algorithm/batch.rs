//! Many independent searches over one shared graph.
//!
//! Each search owns its table, visited set and queue, and the graph is only read, so the
//! searches run on the rayon pool without any coordination.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::DistanceTable;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Runs one search per source in parallel. Results come back in the order of `sources`
pub fn compute_many<A, V, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[V],
) -> Vec<Result<DistanceTable<V, W>>>
where
    A: ShortestPathAlgorithm<V, W, G> + Sync,
    V: Vertex + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<V, W> + Sync,
{
    log::debug!(
        "{}: {} sources over {} vertices",
        algorithm.name(),
        sources.len(),
        graph.vertex_count()
    );
    sources
        .par_iter()
        .map(|source| algorithm.compute(graph, source))
        .collect()
}

/// Distances between every ordered pair of vertices, keyed by source vertex.
///
/// Fails with the first error any search reports.
pub fn distance_matrix<A, V, W, G>(
    algorithm: &A,
    graph: &G,
) -> Result<HashMap<V, DistanceTable<V, W>>>
where
    A: ShortestPathAlgorithm<V, W, G> + Sync,
    V: Vertex + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<V, W> + Sync,
{
    let sources: Vec<V> = graph.vertices().cloned().collect();
    let tables = sources
        .par_iter()
        .map(|source| algorithm.compute(graph, source))
        .collect::<Result<Vec<_>>>()?;

    Ok(sources.into_iter().zip(tables).collect())
}
