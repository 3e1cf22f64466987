//! Side-by-side runs of several engines on one graph.

use std::time::Duration;

use log::{debug, warn};
use serde::Serialize;

use crate::algorithm::{Algorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::timing::timed;
use crate::Result;

/// Result of one engine inside a [`Comparison`]
#[derive(Debug)]
pub struct Outcome<W: Weight> {
    pub algorithm: Algorithm,
    pub result: Result<ShortestPathResult<W>>,
}

/// One printable row per engine
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub algorithm: Algorithm,
    pub elapsed: Option<Duration>,
    pub relaxations: Option<u64>,
    pub reachable: Option<usize>,
    pub error: Option<String>,
}

/// Outcomes of running several engines from the same source
#[derive(Debug)]
pub struct Comparison<W: Weight> {
    pub source: NodeId,
    pub outcomes: Vec<Outcome<W>>,
}

impl<W: Weight> Comparison<W> {
    pub fn successful(&self) -> impl Iterator<Item = (Algorithm, &ShortestPathResult<W>)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.algorithm, r)))
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&Result<ShortestPathResult<W>>> {
        self.outcomes
            .iter()
            .find(|o| o.algorithm == algorithm)
            .map(|o| &o.result)
    }

    /// True when every successful run reports identical distances
    pub fn agree(&self) -> bool {
        let mut runs = self.successful();
        let Some((_, first)) = runs.next() else {
            return true;
        };
        runs.all(|(_, other)| other.distances() == first.distances())
    }

    /// The successful engine with the smallest elapsed time
    pub fn fastest(&self) -> Option<Algorithm> {
        self.successful()
            .min_by_key(|(_, r)| r.elapsed())
            .map(|(algorithm, _)| algorithm)
    }

    pub fn summary(&self) -> Vec<SummaryRow> {
        self.outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(r) => SummaryRow {
                    algorithm: o.algorithm,
                    elapsed: Some(r.elapsed()),
                    relaxations: Some(r.relaxation_count()),
                    reachable: Some(r.reachable_count()),
                    error: None,
                },
                Err(e) => SummaryRow {
                    algorithm: o.algorithm,
                    elapsed: None,
                    relaxations: None,
                    reachable: None,
                    error: Some(e.to_string()),
                },
            })
            .collect()
    }
}

/// Runs each algorithm once from `source`; one engine failing does not stop the others
pub fn compare<W, G>(graph: &G, source: NodeId, algorithms: &[Algorithm]) -> Comparison<W>
where
    W: Weight,
    G: Graph<W>,
{
    let outcomes: Vec<Outcome<W>> = algorithms
        .iter()
        .map(|&algorithm| {
            let result = algorithm.run::<W, G>(graph, source);
            if let Err(e) = &result {
                warn!("{} from {} failed: {}", algorithm, source, e);
            }
            Outcome { algorithm, result }
        })
        .collect();

    let comparison = Comparison { source, outcomes };
    if !comparison.agree() {
        warn!("engines disagree on distances from source {}", source);
    }
    comparison
}

/// Aggregate of one engine over many sources
#[derive(Debug, Clone, Serialize)]
pub struct RepeatedRun {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub total_elapsed: Duration,
    pub total_relaxations: u64,
    /// Wall time around the whole batch, result allocation included
    pub wall_time: Duration,
}

impl RepeatedRun {
    pub fn mean_elapsed(&self) -> Duration {
        if self.runs == 0 {
            Duration::ZERO
        } else {
            self.total_elapsed / self.runs as u32
        }
    }

    pub fn mean_relaxations(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.total_relaxations as f64 / self.runs as f64
        }
    }
}

/// Runs one engine from every source in turn, failing on the first error
pub fn repeat<W, G>(graph: &G, algorithm: Algorithm, sources: &[NodeId]) -> Result<RepeatedRun>
where
    W: Weight,
    G: Graph<W>,
{
    let (outcome, wall_time) = timed(|| -> Result<(Duration, u64)> {
        let mut elapsed = Duration::ZERO;
        let mut relaxations = 0u64;
        for &source in sources {
            let result: ShortestPathResult<W> = algorithm.run(graph, source)?;
            elapsed += result.elapsed();
            relaxations += result.relaxation_count();
        }
        Ok((elapsed, relaxations))
    });
    let (total_elapsed, total_relaxations) = outcome?;

    debug!(
        "{} over {} sources: {:?} total, {} relaxations",
        algorithm,
        sources.len(),
        total_elapsed,
        total_relaxations
    );

    Ok(RepeatedRun {
        algorithm,
        runs: sources.len(),
        total_elapsed,
        total_relaxations,
        wall_time,
    })
}
