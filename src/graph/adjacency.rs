use crate::algorithm::validation::check_weight;
use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists keyed by vertex
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from an adjacency mapping (vertex -> neighbor -> weight).
    ///
    /// Every key becomes a vertex. A neighbor that is not itself a key fails with
    /// [`Error::MalformedGraph`]; negative and NaN weights fail as well.
    pub fn from_adjacency<I, J>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, J)>,
        J: IntoIterator<Item = (V, W)>,
    {
        let rows: Vec<(V, J)> = adjacency.into_iter().collect();
        let mut graph = AdjacencyGraph::with_capacity(rows.len());
        for (vertex, _) in &rows {
            graph.add_vertex(vertex.clone());
        }

        for (from, neighbors) in rows {
            for (to, weight) in neighbors {
                if !graph.has_vertex(&to) {
                    return Err(Error::malformed(&from, &to));
                }
                check_weight(&from, &to, weight)?;
                graph.insert_edge(from.clone(), to, weight);
            }
        }

        Ok(graph)
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> bool {
        self.add_edge(a.clone(), b.clone(), weight) && self.add_edge(b, a, weight)
    }

    /// Returns the graph as a nested adjacency mapping
    pub fn to_adjacency_map(&self) -> HashMap<V, HashMap<V, W>> {
        self.outgoing_edges
            .iter()
            .map(|(vertex, edges)| (vertex.clone(), edges.iter().cloned().collect()))
            .collect()
    }

    fn insert_edge(&mut self, from: V, to: V, weight: W) {
        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            match outgoing.iter().position(|(target, _)| *target == to) {
                Some(index) => outgoing[index].1 = weight,
                None => outgoing.push((to, weight)),
            }
        }
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.has_vertex(&from) || !self.has_vertex(&to) {
            return false;
        }
        if weight.is_nan() || weight < W::zero() {
            return false;
        }
        self.insert_edge(from, to, weight);
        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        if weight.is_nan() || weight < W::zero() {
            return false;
        }
        let edge = self
            .outgoing_edges
            .get_mut(from)
            .and_then(|outgoing| outgoing.iter_mut().find(|(target, _)| target == to));
        match edge {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}

/// The plain nested mapping is itself a graph: `{vertex: {neighbor: weight}}`.
///
/// Neighbors that are not keys are reported by the engine as malformed, never registered.
impl<V, W> Graph<V, W> for HashMap<V, HashMap<V, W>>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.get(from).and_then(|edges| edges.get(to)).copied()
    }
}
