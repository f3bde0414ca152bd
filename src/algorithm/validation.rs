use std::fmt::Debug;

use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// How an engine treats edge weights before it searches.
///
/// Shortest distances are only defined for non-negative weights. Neither policy makes
/// negative weights work: `Validate` rejects them, `Trust` leaves the result unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Scan every edge first and reject negative weights, NaN weights and neighbors that
    /// are not vertices of the graph
    #[default]
    Validate,
    /// Skip the scan. Dangling neighbors reached by the search are still reported
    Trust,
}

/// Checks one edge weight: negative fails with [`Error::NegativeWeight`], NaN with
/// [`Error::InvalidWeight`]. Infinite weights are allowed
pub(crate) fn check_weight<V, W>(from: &V, to: &V, weight: W) -> Result<()>
where
    V: Debug,
    W: Weight,
{
    if weight.is_nan() {
        return Err(Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        });
    }
    if weight < W::zero() {
        return Err(Error::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: weight.to_f64().unwrap_or(f64::NEG_INFINITY),
        });
    }
    Ok(())
}

/// Scans the whole graph: every neighbor must be a vertex and every weight valid
pub fn validate_graph<V, W, G>(graph: &G) -> Result<()>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    for from in graph.vertices() {
        for (to, weight) in graph.outgoing_edges(from) {
            if !graph.has_vertex(to) {
                log::warn!("edge {:?} -> {:?} leaves the graph", from, to);
                return Err(Error::malformed(from, to));
            }
            check_weight(from, to, weight)?;
        }
    }
    Ok(())
}

/// Runs [`validate_graph`] under [`WeightPolicy::Validate`], nothing under `Trust`
pub(crate) fn apply_policy<V, W, G>(policy: WeightPolicy, graph: &G) -> Result<()>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    match policy {
        WeightPolicy::Validate => validate_graph(graph),
        WeightPolicy::Trust => Ok(()),
    }
}
