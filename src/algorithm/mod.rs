pub mod apsp;
pub mod dial;
pub mod dijkstra;
pub mod pape;
pub mod spfa;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

/// The four interchangeable single-source engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    Dial,
    Spfa,
    Pape,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::Dial,
        Algorithm::Spfa,
        Algorithm::Pape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Dial => "dial",
            Algorithm::Spfa => "spfa",
            Algorithm::Pape => "pape",
        }
    }

    /// Label correcting engines tolerate negative arcs; label setting ones do not
    pub fn supports_negative_weights(&self) -> bool {
        matches!(self, Algorithm::Spfa | Algorithm::Pape)
    }

    /// Runs this engine with its default configuration
    pub fn run<W, G>(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        match self {
            Algorithm::Dijkstra => dijkstra::Dijkstra::new().compute_shortest_paths(graph, source),
            Algorithm::Dial => dial::Dial::new().compute_shortest_paths(graph, source),
            Algorithm::Spfa => spfa::Spfa::new().compute_shortest_paths(graph, source),
            Algorithm::Pape => pape::Pape::new().compute_shortest_paths(graph, source),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "binary-heap" => Ok(Algorithm::Dijkstra),
            "dial" | "bucket" => Ok(Algorithm::Dial),
            "spfa" | "fifo" => Ok(Algorithm::Spfa),
            "pape" | "deque" | "d'esopo-pape" => Ok(Algorithm::Pape),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
