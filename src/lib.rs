//! Lazy SSSP - single-source shortest paths with a lazy-deletion heap
//!
//! This library computes shortest distances from one start vertex to every vertex of a
//! directed graph with non-negative edge weights. It runs Dijkstra's algorithm over a binary
//! heap that never decreases keys: improved distances are pushed as new entries and
//! superseded entries are discarded when they surface.
//!
//! The graph goes in as an adjacency mapping (vertex -> neighbor -> weight) and a
//! [`DistanceTable`] comes out, covering every vertex of the graph. Unreachable vertices
//! carry an explicit infinite distance.
//!
//! ```
//! use std::collections::HashMap;
//! use lazy_sssp::ShortestPathEngine;
//!
//! let mut graph: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
//! graph.insert("A", HashMap::from([("B", 1.0)]));
//! graph.insert("B", HashMap::new());
//!
//! let table = ShortestPathEngine::new().compute(&graph, &"A").unwrap();
//! assert_eq!(table.get(&"B"), Some(1.0));
//! ```

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::{SearchStats, ShortestPathEngine},
    validation::WeightPolicy,
    ShortestPathAlgorithm,
};
pub use data_structures::DistanceTable;
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::{Graph, MutableGraph, Vertex, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("Malformed graph: edge {from} -> {to} points at a vertex missing from the graph")]
    MalformedGraph { from: String, to: String },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Edge weight is not a number on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String },

    #[error("Invalid graph document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound(format!("{:?}", vertex))
    }

    pub(crate) fn malformed<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::MalformedGraph {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
