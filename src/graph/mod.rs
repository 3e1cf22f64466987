pub mod adjacency;
pub mod arc;
pub mod dimacs;
pub mod generators;
pub mod traits;

pub use adjacency::{AdjacencyList, GraphBuilder};
pub use arc::{Arc, NodeId, Weight};
pub use traits::Graph;
