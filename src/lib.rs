//! SSSP Suite - four interchangeable single-source shortest path engines
//!
//! Dijkstra (binary heap), Dial (bucket queue), SPFA (FIFO label correcting)
//! and PAPE (deque label correcting) share one immutable adjacency structure
//! and one result model. Every run reports its elapsed processing time and the
//! number of arc relaxations it performed, so the engines can be compared on
//! the same graph.
//!
//! Nodes are numbered `1..=n`; index 0 is reserved and never holds data.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod timing;
pub mod web;

pub use algorithm::{
    apsp::{AllPairsResult, AllPairsShortestPaths},
    dial::{BucketSizing, Dial},
    dijkstra::Dijkstra,
    pape::Pape,
    spfa::Spfa,
    Algorithm, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Arc, Graph, GraphBuilder, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge: from {from} to {to} (graph has {node_count} nodes)")]
    InvalidEdge {
        from: usize,
        to: usize,
        node_count: usize,
    },

    #[error("Negative edge weight {length} on arc {from} -> {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        length: String,
    },

    #[error("Negative cycle reachable from source {start} (detected at node {node})")]
    NegativeCycle { start: usize, node: usize },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Graph with {node_count} nodes exceeds the limit of {limit}")]
    GraphTooLarge { node_count: usize, limit: usize },

    #[error("Distance {key} needs more than the {limit} buckets allowed")]
    BucketLimit { key: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
