pub mod distance_table;
pub mod priority_queue;

pub use distance_table::DistanceTable;
pub use priority_queue::LazyMinQueue;
