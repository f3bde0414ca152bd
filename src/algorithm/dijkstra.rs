use std::collections::HashSet;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::validation::{apply_policy, WeightPolicy};
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{DistanceTable, LazyMinQueue};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Counters collected during one computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries pushed onto the queue, the seed included
    pub pushes: usize,
    /// Entries popped from the queue, stale ones included
    pub pops: usize,
    /// Popped entries discarded because their vertex was already finalized
    pub stale_pops: usize,
    /// Successful relaxations (a tentative distance improved)
    pub relaxations: usize,
    /// Vertices whose distance became final
    pub finalized: usize,
}

/// Dijkstra's algorithm over a lazy-deletion binary heap.
///
/// A vertex's distance is final the first time it is popped; later entries for it are
/// stale and dropped at pop time. Requires non-negative weights, see [`WeightPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathEngine {
    weight_policy: WeightPolicy,
}

impl ShortestPathEngine {
    /// Creates an engine that validates the graph before every search
    pub fn new() -> Self {
        ShortestPathEngine {
            weight_policy: WeightPolicy::Validate,
        }
    }

    /// Set how edge weights are checked before searching
    pub fn with_weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weight_policy = policy;
        self
    }

    /// Shortest distances from `start` to every vertex of `graph`
    pub fn compute<V, W, G>(&self, graph: &G, start: &V) -> Result<DistanceTable<V, W>>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W>,
    {
        self.compute_with_stats(graph, start).map(|(table, _)| table)
    }

    /// Like [`compute`](ShortestPathEngine::compute), also returning search counters
    pub fn compute_with_stats<V, W, G>(
        &self,
        graph: &G,
        start: &V,
    ) -> Result<(DistanceTable<V, W>, SearchStats)>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(start) {
            return Err(Error::vertex_not_found(start));
        }
        apply_policy(self.weight_policy, graph)?;

        log::debug!(
            "dijkstra from {:?} over {} vertices, {} edges",
            start,
            graph.vertex_count(),
            graph.edge_count()
        );

        let mut table = DistanceTable::new(start.clone(), graph.vertices());
        let mut visited: HashSet<&V> = HashSet::with_capacity(graph.vertex_count());
        let mut queue: LazyMinQueue<&V, OrderedFloat<W>> = LazyMinQueue::new();
        let mut stats = SearchStats::default();

        queue.push(start, OrderedFloat(W::zero()));
        stats.pushes += 1;

        while let Some((vertex, distance)) = queue.pop_fresh(|vertex, _| visited.contains(vertex)) {
            // First pop of a vertex carries its minimum key: the distance is final
            visited.insert(vertex);
            stats.finalized += 1;
            let distance = distance.into_inner();

            for (neighbor, weight) in graph.outgoing_edges(vertex) {
                if visited.contains(neighbor) {
                    continue;
                }
                let candidate = distance + weight;
                match table.relax(neighbor, candidate) {
                    Some(true) => {
                        stats.relaxations += 1;
                        stats.pushes += 1;
                        queue.push(neighbor, OrderedFloat(candidate));
                    }
                    Some(false) => {}
                    None => {
                        log::warn!("edge {:?} -> {:?} leaves the graph", vertex, neighbor);
                        return Err(Error::malformed(vertex, neighbor));
                    }
                }
            }
        }

        stats.stale_pops = queue.discarded();
        stats.pops = stats.finalized + stats.stale_pops;

        log::debug!(
            "dijkstra from {:?} finalized {} of {} vertices ({} stale pops)",
            start,
            stats.finalized,
            table.len(),
            stats.stale_pops
        );

        Ok((table, stats))
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for ShortestPathEngine
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn compute(&self, graph: &G, start: &V) -> Result<DistanceTable<V, W>> {
        self.compute_with_stats(graph, start).map(|(table, _)| table)
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}
