pub mod traits;
pub mod validation;
pub mod dijkstra;
pub mod bellman_ford;
pub mod batch;

pub use traits::ShortestPathAlgorithm;
