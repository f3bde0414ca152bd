pub mod traits;
pub mod adjacency;
pub mod document;
pub mod generators;

pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use adjacency::AdjacencyGraph;
