use crate::data_structures::DistanceTable;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Trait for single-source shortest distance algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest distances from `start` to every vertex of `graph`.
    ///
    /// Fails with [`crate::Error::VertexNotFound`] if `start` is not a vertex of the graph.
    fn compute(&self, graph: &G, start: &V) -> Result<DistanceTable<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
