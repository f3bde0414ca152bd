use crate::algorithm::validation::{apply_policy, WeightPolicy};
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::DistanceTable;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Reference engine: relaxes every edge in rounds until nothing improves.
///
/// O(V * E) and queue-free, so it shares no machinery with [`super::dijkstra`] and is used to
/// cross-check it. Runs at most `V - 1` rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord {
    weight_policy: WeightPolicy,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord {
            weight_policy: WeightPolicy::Validate,
        }
    }

    /// Set how edge weights are checked before searching
    pub fn with_weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weight_policy = policy;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BellmanFord
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn compute(&self, graph: &G, start: &V) -> Result<DistanceTable<V, W>> {
        if !graph.has_vertex(start) {
            return Err(Error::vertex_not_found(start));
        }
        apply_policy(self.weight_policy, graph)?;

        let vertices: Vec<&V> = graph.vertices().collect();
        let mut table = DistanceTable::new(start.clone(), vertices.iter().copied());

        let max_rounds = vertices.len().saturating_sub(1);
        let mut rounds = 0;
        while rounds < max_rounds {
            rounds += 1;
            let mut changed = false;
            for &from in &vertices {
                let Some(base) = table.distance(from) else {
                    continue;
                };
                for (to, weight) in graph.outgoing_edges(from) {
                    match table.relax(to, base + weight) {
                        Some(improved) => changed |= improved,
                        None => return Err(Error::malformed(from, to)),
                    }
                }
            }
            if !changed {
                break;
            }
        }

        log::debug!("bellman-ford from {:?} settled after {} rounds", start, rounds);
        Ok(table)
    }

    fn name(&self) -> &'static str {
        "bellman-ford"
    }
}
