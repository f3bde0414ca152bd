//! JSON adjacency documents.
//!
//! A document is the nested mapping form of a graph with string vertices and numeric
//! weights: `{"A": {"B": 5, "C": 10}, "B": {}, "C": {}}`.

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::{Graph, Vertex, Weight};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Nested adjacency mapping with string vertex ids, as exchanged over JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDocument(pub BTreeMap<String, BTreeMap<String, f64>>);

impl GraphDocument {
    /// Parses a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the document as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds a validated graph from the document
    pub fn to_graph(&self) -> Result<AdjacencyGraph<String, f64>> {
        AdjacencyGraph::from_adjacency(self.0.iter().map(|(vertex, edges)| {
            (
                vertex.clone(),
                edges
                    .iter()
                    .map(|(target, weight)| (target.clone(), *weight))
                    .collect::<Vec<_>>(),
            )
        }))
    }

    /// Captures any graph as a document, rendering vertices with `to_string`
    pub fn from_graph<V, W, G>(graph: &G) -> Self
    where
        V: Vertex + ToString,
        W: Weight,
        G: Graph<V, W>,
    {
        let adjacency = graph
            .vertices()
            .map(|vertex| {
                let edges = graph
                    .outgoing_edges(vertex)
                    .map(|(target, weight)| {
                        (target.to_string(), weight.to_f64().unwrap_or(f64::NAN))
                    })
                    .collect();
                (vertex.to_string(), edges)
            })
            .collect();
        GraphDocument(adjacency)
    }

    /// Returns the document as a hash-keyed nested mapping
    pub fn to_adjacency_map(&self) -> HashMap<String, HashMap<String, f64>> {
        self.0
            .iter()
            .map(|(vertex, edges)| {
                let edges = edges.iter().map(|(t, w)| (t.clone(), *w)).collect();
                (vertex.clone(), edges)
            })
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.0.len()
    }

    pub fn edge_count(&self) -> usize {
        self.0.values().map(|edges| edges.len()).sum()
    }
}
