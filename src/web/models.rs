use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::algorithm::ShortestPathResult;
use crate::graph::{AdjacencyList, Arc, Graph};
use crate::timing::as_millis_f64;

/// Graph shared read-only between a session and every in-flight run
pub type SharedGraph = std::sync::Arc<AdjacencyList<i64>>;

/// Explicit graph upload
#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    pub node_count: usize,
    pub arcs: Vec<Arc<i64>>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    /// One of `random`, `grid`, `dag`
    pub graph_type: String,
    #[serde(default)]
    pub node_count: usize,
    #[serde(default = "default_arcs_per_node")]
    pub arcs_per_node: usize,
    #[serde(default = "default_max_length")]
    pub max_length: i64,
    /// Lower bound for `dag` lengths; may be negative
    #[serde(default = "default_min_length")]
    pub min_length: i64,
    #[serde(default)]
    pub grid_dimensions: Option<(usize, usize)>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_arcs_per_node() -> usize { 4 }
fn default_max_length() -> i64 { 100 }
fn default_min_length() -> i64 { -10 }

/// Shape of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub arc_count: usize,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub has_negative_arcs: bool,
}

impl GraphSummary {
    pub fn of(graph: &AdjacencyList<i64>) -> Self {
        GraphSummary {
            node_count: graph.node_count(),
            arc_count: graph.arc_count(),
            min_length: graph.min_arc_length(),
            max_length: graph.max_arc_length(),
            has_negative_arcs: graph.first_negative_arc().is_some(),
        }
    }
}

/// Parameters for algorithm execution
#[derive(Debug, Clone, Deserialize)]
pub struct AlgorithmRequest {
    pub algorithm: String,
    pub source: usize,
}

/// Response containing one run's results; only reachable nodes are listed
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    pub relaxations: u64,
    pub reachable: usize,
    pub distances: BTreeMap<usize, i64>,
    pub predecessors: BTreeMap<usize, usize>,
}

impl From<&ShortestPathResult<i64>> for AlgorithmResponse {
    fn from(result: &ShortestPathResult<i64>) -> Self {
        let distances = result
            .distances()
            .iter()
            .enumerate()
            .filter_map(|(node, d)| d.map(|d| (node, d)))
            .collect();
        let predecessors = result
            .predecessors()
            .iter()
            .enumerate()
            .filter_map(|(node, p)| p.map(|p| (node, p)))
            .collect();

        AlgorithmResponse {
            execution_id: Uuid::new_v4(),
            algorithm: result.algorithm().to_string(),
            source: result.source(),
            execution_time_ms: as_millis_f64(result.elapsed()),
            relaxations: result.relaxation_count(),
            reachable: result.reachable_count(),
            distances,
            predecessors,
        }
    }
}

/// Parameters for a side-by-side comparison; empty `algorithms` means all four
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub source: usize,
    #[serde(default)]
    pub algorithms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub source: usize,
    pub agree: bool,
    pub fastest: Option<String>,
    pub results: Vec<AlgorithmResponse>,
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApspVariant {
    Algebraic,
    Graphical,
}

#[derive(Debug, Deserialize)]
pub struct ApspRequest {
    pub variant: ApspVariant,
}

/// All-pairs distances; `distances[i][j]` is the `i+1 -> j+1` distance
#[derive(Debug, Serialize)]
pub struct ApspResponse {
    pub execution_id: Uuid,
    pub variant: ApspVariant,
    pub node_count: usize,
    pub execution_time_ms: f64,
    pub relaxations: u64,
    pub distances: Vec<Vec<Option<i64>>>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a graph and its most recent run
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub graph: SharedGraph,
    pub summary: GraphSummary,
    pub last_result: Option<AlgorithmResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: AdjacencyList<i64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: GraphSummary::of(&graph),
            graph: std::sync::Arc::new(graph),
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
