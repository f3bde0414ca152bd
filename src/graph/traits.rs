use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Bounds required of a vertex identifier.
///
/// Vertices are looked up by hash and equality. Their ordering only breaks ties between
/// queue entries of equal distance and never affects computed distances.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Bounds required of an edge weight. `W::infinity()` is the unreachable sentinel.
///
/// Weights are floating point (`f32` or `f64`). Integer weights such as `{"A": {"B": 5}}`
/// are converted to floats when the graph is built; `GraphDocument` does this for JSON.
pub trait Weight: Float + Debug {}

impl<T> Weight for T where T: Float + Debug {}

/// Trait representing a read-only weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns the total weight of a path given as a vertex sequence, or None if a hop
    /// along it is not an edge of the graph
    fn path_weight(&self, path: &[V]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.edge_weight(&hop[0], &hop[1]).map(|weight| total + weight)
        })
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds a vertex to the graph. Returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge, or updates its weight if the edge exists.
    /// Returns false if either endpoint is missing or the weight is negative or NaN
    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;
}
