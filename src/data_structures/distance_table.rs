use std::collections::HashMap;

use crate::graph::{Vertex, Weight};

/// Shortest distances from one start vertex to every vertex of a graph.
///
/// The table covers exactly the vertex set the graph had when the computation ran. A vertex
/// with no finite path from the start is present with the infinite sentinel
/// ([`DistanceTable::infinity`]), never absent.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    start: V,
    distances: HashMap<V, W>,
}

impl<V, W> DistanceTable<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Sets every vertex to infinity except `start`, which is set to zero
    pub fn new<'a, I>(start: V, vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut distances: HashMap<V, W> = vertices
            .into_iter()
            .map(|vertex| (vertex.clone(), W::infinity()))
            .collect();
        distances.insert(start.clone(), W::zero());
        DistanceTable { start, distances }
    }

    /// The sentinel carried by unreachable vertices
    pub fn infinity() -> W {
        W::infinity()
    }

    /// The vertex distances are measured from
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Distance of `vertex`, infinite if unreachable. None if the vertex is not in the table
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Finite distance of `vertex`, or None if it is unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.get(vertex).filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of vertices in the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of vertices with a finite distance, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Vertices left at the infinite sentinel
    pub fn unreachable(&self) -> impl Iterator<Item = &V> + '_ {
        self.distances
            .iter()
            .filter(|(_, d)| !d.is_finite())
            .map(|(vertex, _)| vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(vertex, d)| (vertex, *d))
    }

    /// Reachable vertices in ascending distance, ties in vertex order
    pub fn sorted_by_distance(&self) -> Vec<(&V, W)> {
        let mut reachable: Vec<(&V, W)> = self.iter().filter(|(_, d)| d.is_finite()).collect();
        reachable.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        reachable
    }

    pub fn into_map(self) -> HashMap<V, W> {
        self.distances
    }

    /// Lowers the distance of `vertex` to `candidate` if that is an improvement.
    ///
    /// Returns `Some(true)` when the table changed, `Some(false)` when it did not, and None if
    /// the vertex is not in the table.
    pub(crate) fn relax(&mut self, vertex: &V, candidate: W) -> Option<bool> {
        let current = self.distances.get_mut(vertex)?;
        if candidate < *current {
            *current = candidate;
            Some(true)
        } else {
            Some(false)
        }
    }
}
